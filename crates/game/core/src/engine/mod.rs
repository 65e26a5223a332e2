//! Battle session and the selection state machine.
//!
//! The [`BattleSession`] is the aggregate root of a match. It owns the grid,
//! the live units, the active player and the current selection, and it is the
//! only place state is mutated. Inputs arrive one at a time through
//! [`BattleSession::submit_input`] and [`BattleSession::end_turn`]; each call
//! runs to completion and reports what changed as [`BattleEvent`]s.

mod errors;
mod events;
mod phase;
pub mod range;
mod transition;
mod turns;

pub use errors::SessionError;
pub use events::{BattleEvent, InputOutcome};
pub use phase::{Outcome, Phase};

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::config::BattleConfig;
use crate::env::{
    Archetype, ArchetypeId, ArchetypeResolver, ConfigSnapshot, MapDescriptor, MapDimensions,
};
use crate::state::{Grid, PlayerId, Position, SetupError, Unit, UnitId};

/// One unit of a resolved setup, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitSpec {
    pub archetype: Arc<Archetype>,
    pub position: Position,
    pub owner: u8,
}

/// Fully resolved battle setup: map plus roster with concrete archetypes.
///
/// A session keeps its setup so it can be restarted from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleSetup {
    map: MapDescriptor,
    roster: Vec<UnitSpec>,
}

impl BattleSetup {
    /// Empty roster on the given map.
    pub fn new(map: MapDescriptor) -> Self {
        Self {
            map,
            roster: Vec::new(),
        }
    }

    /// Resolves a configuration snapshot, applying every fallback.
    ///
    /// A missing map selects the default 10x8 map and a missing placement the
    /// default 5-vs-5 layout, independently of each other. Units sharing an
    /// identifier share one archetype instance.
    pub fn from_snapshot(snapshot: &ConfigSnapshot) -> Self {
        let map = snapshot.map.unwrap_or_else(|| {
            tracing::warn!("no map descriptor configured, using default map");
            BattleConfig::default_map()
        });

        let default_placement;
        let placement = match &snapshot.placement {
            Some(placement) => placement,
            None => {
                tracing::warn!("no placement configured, using default layout");
                default_placement = BattleConfig::default_placement();
                &default_placement
            }
        };

        let resolver = ArchetypeResolver::new(snapshot.archetypes.as_ref());
        let mut resolved: HashMap<ArchetypeId, Arc<Archetype>> = HashMap::new();
        let roster = placement
            .iter()
            .map(|entry| {
                let archetype = resolved
                    .entry(entry.archetype.clone())
                    .or_insert_with(|| {
                        let resolution = resolver.resolve(&entry.archetype);
                        tracing::debug!(
                            archetype = %entry.archetype,
                            tier = ?resolution.tier,
                            "resolved archetype"
                        );
                        Arc::new(resolution.archetype)
                    })
                    .clone();
                UnitSpec {
                    archetype,
                    position: entry.position,
                    owner: entry.owner,
                }
            })
            .collect();

        Self { map, roster }
    }

    pub fn with_unit(mut self, archetype: Archetype, position: Position, owner: u8) -> Self {
        self.roster.push(UnitSpec {
            archetype: Arc::new(archetype),
            position,
            owner,
        });
        self
    }

    pub fn map(&self) -> MapDescriptor {
        self.map
    }

    pub fn roster(&self) -> &[UnitSpec] {
        &self.roster
    }
}

/// Authoritative state of one match.
#[derive(Clone, Debug)]
pub struct BattleSession {
    setup: BattleSetup,
    grid: Grid,
    units: Vec<Unit>,
    active_player: PlayerId,
    phase: Phase,
    selection: Option<UnitId>,
    legal_moves: BTreeSet<Position>,
    legal_attacks: BTreeSet<Position>,
}

impl BattleSession {
    /// Builds a session from a configuration snapshot.
    ///
    /// Configuration faults are absorbed by the fallback chain; only invariant
    /// violations in the resulting setup are reported.
    pub fn new(snapshot: &ConfigSnapshot) -> Result<Self, SetupError> {
        Self::from_setup(BattleSetup::from_snapshot(snapshot))
    }

    /// Session on the default map with the default layout and built-in stats.
    pub fn with_defaults() -> Result<Self, SetupError> {
        Self::new(&ConfigSnapshot::empty())
    }

    /// Validates `setup` and places its units.
    pub fn from_setup(setup: BattleSetup) -> Result<Self, SetupError> {
        let grid = Grid::new(setup.map.dimensions())?;
        let mut units: Vec<Unit> = Vec::with_capacity(setup.roster.len());

        for (index, entry) in setup.roster.iter().enumerate() {
            let owner = PlayerId::try_from(entry.owner).map_err(|owner| SetupError::InvalidOwner {
                position: entry.position,
                owner,
            })?;
            if entry.archetype.max_hp == 0 {
                return Err(SetupError::ZeroMaxHp {
                    position: entry.position,
                    archetype: entry.archetype.display_name.clone(),
                });
            }
            if !grid.is_in_bounds(entry.position) {
                return Err(SetupError::PositionOutOfBounds {
                    position: entry.position,
                    dimensions: grid.dimensions(),
                });
            }
            if let Some(occupant) = grid.occupant_at(&units, entry.position) {
                return Err(SetupError::PositionOccupied {
                    position: entry.position,
                    occupant: occupant.id(),
                });
            }

            units.push(Unit::new(
                UnitId(index as u32),
                owner,
                entry.position,
                Arc::clone(&entry.archetype),
            ));
        }

        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            units = units.len(),
            "battle session created"
        );

        Ok(Self {
            setup,
            grid,
            units,
            active_player: BattleConfig::FIRST_PLAYER,
            phase: Phase::Idle,
            selection: None,
            legal_moves: BTreeSet::new(),
            legal_attacks: BTreeSet::new(),
        })
    }

    /// Rebuilds the session from the setup it was created with.
    pub fn restart(&mut self) -> Result<(), SetupError> {
        *self = Self::from_setup(self.setup.clone())?;
        tracing::info!("battle restarted");
        Ok(())
    }

    pub fn setup(&self) -> &BattleSetup {
        &self.setup
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn map(&self) -> MapDescriptor {
        self.setup.map
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.grid.dimensions()
    }

    /// Live units in placement order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id() == id)
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.grid.occupant_at(&self.units, position)
    }

    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<UnitId> {
        self.selection
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        self.selection.and_then(|id| self.unit(id))
    }

    /// Destinations the selected unit may move to. Empty without a selection.
    pub fn legal_moves(&self) -> &BTreeSet<Position> {
        &self.legal_moves
    }

    /// Enemy positions the selected unit may attack. Empty without a selection.
    pub fn legal_attacks(&self) -> &BTreeSet<Position> {
        &self.legal_attacks
    }

    /// Number of live units owned by `player`.
    pub fn live_count(&self, player: PlayerId) -> usize {
        self.units
            .iter()
            .filter(|unit| unit.owner() == player)
            .count()
    }

    fn unit_index(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|unit| unit.id() == id)
    }

    fn ensure_running(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::GameOver(outcome) => Err(SessionError::GameOver { outcome }),
            _ => Ok(()),
        }
    }
}
