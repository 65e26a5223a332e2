//! Facts the session emits for presentation collaborators.

use super::{Outcome, Phase};
use crate::state::{PlayerId, Position, UnitId};

/// A state change produced by one accepted input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    UnitSelected {
        unit_id: UnitId,
        position: Position,
    },
    SelectionCleared,
    Moved {
        unit_id: UnitId,
        from: Position,
        to: Position,
    },
    Attacked {
        attacker_id: UnitId,
        defender_id: UnitId,
        damage: u32,
        defender_died: bool,
    },
    TurnEnded {
        new_active_player: PlayerId,
    },
    GameOver {
        outcome: Outcome,
    },
}

/// Result of submitting one input to the session.
///
/// An empty `events` list means the input was absorbed as a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputOutcome {
    /// Phase after the input was processed.
    pub phase: Phase,
    pub events: Vec<BattleEvent>,
}

impl InputOutcome {
    pub fn new(phase: Phase, events: Vec<BattleEvent>) -> Self {
        Self { phase, events }
    }

    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    /// The attack event, if this input resolved one.
    pub fn attack(&self) -> Option<&BattleEvent> {
        self.events
            .iter()
            .find(|event| matches!(event, BattleEvent::Attacked { .. }))
    }
}
