use crate::env::{BuiltinArchetype, MapDescriptor, PlacementSpec};
use crate::state::{PlayerId, Position};

/// Battle constants and the built-in setup used when configuration is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BattleConfig;

impl BattleConfig {
    pub const DEFAULT_MAP_WIDTH: u32 = 10;
    pub const DEFAULT_MAP_HEIGHT: u32 = 8;
    pub const DEFAULT_TILE_SIZE: u32 = 80;

    /// Lower bound on damage dealt by a single attack.
    pub const MINIMUM_DAMAGE: u32 = 1;

    /// Side that acts first in a fresh session.
    pub const FIRST_PLAYER: PlayerId = PlayerId::One;

    /// The 10x8 map used when no descriptor is configured.
    pub fn default_map() -> MapDescriptor {
        MapDescriptor::default()
    }

    /// Symmetric 5-vs-5 layout: player 1 along the top row from the left,
    /// player 2 along the bottom row ending at the right edge.
    pub fn default_placement() -> Vec<PlacementSpec> {
        const LINEUP: [BuiltinArchetype; 5] = [
            BuiltinArchetype::Warrior,
            BuiltinArchetype::Archer,
            BuiltinArchetype::Mage,
            BuiltinArchetype::Tank,
            BuiltinArchetype::Knight,
        ];

        let bottom = Self::DEFAULT_MAP_HEIGHT as i32 - 1;
        let right_start = Self::DEFAULT_MAP_WIDTH as i32 - LINEUP.len() as i32;

        let top_row = LINEUP.iter().enumerate().map(|(i, kind)| {
            PlacementSpec::new(kind.as_ref(), Position::new(i as i32, 0), PlayerId::One.number())
        });
        let bottom_row = LINEUP.iter().enumerate().map(|(i, kind)| {
            PlacementSpec::new(
                kind.as_ref(),
                Position::new(right_start + i as i32, bottom),
                PlayerId::Two.number(),
            )
        });

        top_row.chain(bottom_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placement_fits_default_map() {
        let map = BattleConfig::default_map().dimensions();
        let placement = BattleConfig::default_placement();
        assert_eq!(placement.len(), 10);
        assert!(placement.iter().all(|entry| map.contains(entry.position)));
        assert_eq!(placement[5].position, Position::new(5, 7));
        assert_eq!(placement[9].position, Position::new(9, 7));
        assert_eq!(placement.iter().filter(|entry| entry.owner == 1).count(), 5);
    }
}
