use std::sync::Arc;

use bitflags::bitflags;

use super::{PlayerId, Position, UnitId};
use crate::combat::{self, DamageOutcome};
use crate::env::Archetype;

bitflags! {
    /// Actions a unit has already spent during the current turn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActionFlags: u8 {
        const MOVED    = 1 << 0;
        const ATTACKED = 1 << 1;
    }
}

/// Mutable battle state of a single piece.
///
/// # Invariants
///
/// - `0 <= current_hp <= archetype.max_hp`
/// - a unit held by a session always has `current_hp > 0`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    id: UnitId,
    owner: PlayerId,
    position: Position,
    archetype: Arc<Archetype>,
    current_hp: u32,
    spent: ActionFlags,
}

impl Unit {
    /// Creates a unit at full health with a fresh action budget.
    pub fn new(id: UnitId, owner: PlayerId, position: Position, archetype: Arc<Archetype>) -> Self {
        let current_hp = archetype.max_hp;
        Self {
            id,
            owner,
            position,
            archetype,
            current_hp,
            spent: ActionFlags::empty(),
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.archetype.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn has_moved(&self) -> bool {
        self.spent.contains(ActionFlags::MOVED)
    }

    pub fn has_attacked(&self) -> bool {
        self.spent.contains(ActionFlags::ATTACKED)
    }

    pub fn can_move(&self) -> bool {
        !self.has_moved()
    }

    pub fn can_attack(&self) -> bool {
        !self.has_attacked()
    }

    pub fn spent_actions(&self) -> ActionFlags {
        self.spent
    }

    /// Takes a hit of `raw` attack power.
    ///
    /// Defense is subtracted but at least one point of damage always lands.
    pub fn apply_damage(&mut self, raw: u32) -> DamageOutcome {
        let actual_damage = combat::calculate_damage(raw, self.archetype.defense);
        self.current_hp = combat::apply_damage(self.current_hp, actual_damage);
        DamageOutcome {
            actual_damage,
            died: self.current_hp == 0,
        }
    }

    /// Clears both per-turn flags.
    pub fn reset_turn_flags(&mut self) {
        self.spent = ActionFlags::empty();
    }

    pub(crate) fn move_to(&mut self, destination: Position) {
        self.position = destination;
        self.spent.insert(ActionFlags::MOVED);
    }

    pub(crate) fn mark_attacked(&mut self) {
        self.spent.insert(ActionFlags::ATTACKED);
    }
}
