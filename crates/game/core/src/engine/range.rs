//! Movement and attack footprints.
//!
//! The two shapes differ on purpose: movement is a Manhattan diamond while
//! attacks cover the full bounding square of the same radius. A radius-2
//! attacker reaches the diagonal corner `(+2, +2)` even though that tile is
//! four steps away.
//!
//! Both queries are O(range²) and ignore the unit's action budget; the
//! session decides whether to ask.

use std::collections::BTreeSet;

use crate::state::{Grid, Position, Unit};

/// Destinations `unit` may move to: in bounds, unoccupied, and within
/// `move_range` Manhattan distance of its position.
pub fn movement_range(grid: &Grid, units: &[Unit], unit: &Unit) -> BTreeSet<Position> {
    let origin = unit.position();
    let reach = unit.archetype().move_range;

    grid.square_around(origin, reach)
        .filter(|candidate| origin.manhattan_distance(*candidate) <= reach)
        .filter(|candidate| !grid.is_occupied(units, *candidate))
        .collect()
}

/// Targets `unit` may attack: in bounds, inside the bounding square of
/// `attack_range`, and occupied by an enemy.
pub fn attack_targets(grid: &Grid, units: &[Unit], unit: &Unit) -> BTreeSet<Position> {
    let origin = unit.position();
    let reach = unit.archetype().attack_range;

    grid.square_around(origin, reach)
        .filter(|candidate| origin.chebyshev_distance(*candidate) <= reach)
        .filter(|candidate| {
            grid.occupant_at(units, *candidate)
                .is_some_and(|target| target.owner() != unit.owner())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::{Archetype, BuiltinArchetype, Color, MapDimensions};
    use crate::state::{PlayerId, UnitId};

    fn grid() -> Grid {
        Grid::new(MapDimensions::new(10, 8)).unwrap()
    }

    fn ranged(move_range: u32, attack_range: u32) -> Arc<Archetype> {
        Arc::new(Archetype {
            max_hp: 10,
            attack: 10,
            defense: 0,
            attack_range,
            move_range,
            display_name: "Probe".to_string(),
            color: Color::default(),
        })
    }

    fn unit(id: u32, owner: PlayerId, x: i32, y: i32, archetype: Arc<Archetype>) -> Unit {
        Unit::new(UnitId(id), owner, Position::new(x, y), archetype)
    }

    #[test]
    fn movement_is_a_diamond() {
        let units = vec![unit(0, PlayerId::One, 5, 5, ranged(3, 0))];
        let moves = movement_range(&grid(), &units, &units[0]);

        assert!(moves.contains(&Position::new(8, 5)));
        assert!(moves.contains(&Position::new(5, 2)));
        assert!(moves.contains(&Position::new(6, 7)));
        assert!(!moves.contains(&Position::new(7, 7)));
        assert!(!moves.contains(&Position::new(5, 8)), "y = 8 is off the map");
        assert!(!moves.contains(&Position::new(5, 5)), "own tile is occupied");
        // Full diamond of radius 3 has 25 tiles; the bottom tip (5, 8) is cut
        // off and the centre is occupied.
        assert_eq!(moves.len(), 23);
    }

    #[test]
    fn movement_skips_occupied_tiles() {
        let units = vec![
            unit(0, PlayerId::One, 5, 5, ranged(1, 0)),
            unit(1, PlayerId::One, 6, 5, ranged(1, 0)),
            unit(2, PlayerId::Two, 5, 4, ranged(1, 0)),
        ];
        let moves = movement_range(&grid(), &units, &units[0]);
        assert_eq!(
            moves.into_iter().collect::<Vec<_>>(),
            vec![Position::new(4, 5), Position::new(5, 6)]
        );
    }

    #[test]
    fn attack_footprint_is_a_square() {
        let units = vec![
            unit(0, PlayerId::One, 5, 5, ranged(0, 2)),
            unit(1, PlayerId::Two, 7, 7, ranged(0, 0)),
            unit(2, PlayerId::Two, 8, 5, ranged(0, 0)),
        ];
        let targets = attack_targets(&grid(), &units, &units[0]);
        assert_eq!(
            targets.into_iter().collect::<Vec<_>>(),
            vec![Position::new(7, 7)]
        );
    }

    #[test]
    fn allies_are_never_targets() {
        let units = vec![
            unit(0, PlayerId::One, 0, 0, Arc::new(BuiltinArchetype::Archer.archetype())),
            unit(1, PlayerId::One, 1, 1, ranged(0, 0)),
            unit(2, PlayerId::Two, 2, 0, ranged(0, 0)),
        ];
        let targets = attack_targets(&grid(), &units, &units[0]);
        assert_eq!(
            targets.into_iter().collect::<Vec<_>>(),
            vec![Position::new(2, 0)]
        );
    }

    #[test]
    fn zero_ranges_yield_nothing() {
        let units = vec![
            unit(0, PlayerId::One, 3, 3, ranged(0, 0)),
            unit(1, PlayerId::Two, 3, 4, ranged(0, 0)),
        ];
        assert!(movement_range(&grid(), &units, &units[0]).is_empty());
        assert!(attack_targets(&grid(), &units, &units[0]).is_empty());
    }
}
