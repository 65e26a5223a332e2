//! Configuration snapshot consumed when a battle is set up.

use super::{ArchetypeId, ArchetypeTable, MapDescriptor};
use crate::state::Position;

/// One unit to place on the battlefield at setup.
///
/// `owner` is kept as the raw number from configuration and validated when
/// the session is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementSpec {
    pub archetype: ArchetypeId,
    pub position: Position,
    pub owner: u8,
}

impl PlacementSpec {
    pub fn new(archetype: impl Into<ArchetypeId>, position: Position, owner: u8) -> Self {
        Self {
            archetype: archetype.into(),
            position,
            owner,
        }
    }
}

/// Everything configuration supplies to the engine.
///
/// Each field is optional; a missing field selects the built-in default when
/// the session is constructed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigSnapshot {
    pub archetypes: Option<ArchetypeTable>,
    pub map: Option<MapDescriptor>,
    pub placement: Option<Vec<PlacementSpec>>,
}

impl ConfigSnapshot {
    /// Snapshot with nothing loaded; every field falls back to defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_archetypes(mut self, archetypes: ArchetypeTable) -> Self {
        self.archetypes = Some(archetypes);
        self
    }

    pub fn with_map(mut self, map: MapDescriptor) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_placement(mut self, placement: Vec<PlacementSpec>) -> Self {
        self.placement = Some(placement);
        self
    }
}
