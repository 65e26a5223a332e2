use super::{Position, Unit};
use crate::env::MapDimensions;
use crate::state::SetupError;

/// Fixed-size rectangular battlefield.
///
/// The grid stores no cell data. Occupancy is derived from unit positions on
/// every query so there is a single source of truth for where units stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: MapDimensions,
}

impl Grid {
    pub fn new(dimensions: MapDimensions) -> Result<Self, SetupError> {
        if dimensions.is_empty() {
            return Err(SetupError::EmptyMap {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        Ok(Self { dimensions })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn is_in_bounds(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Returns the unit standing at `position`, if any.
    pub fn occupant_at<'u>(&self, units: &'u [Unit], position: Position) -> Option<&'u Unit> {
        units.iter().find(|unit| unit.position() == position)
    }

    pub fn is_occupied(&self, units: &[Unit], position: Position) -> bool {
        self.occupant_at(units, position).is_some()
    }

    /// In-bounds positions of the square of radius `radius` around `center`,
    /// row by row. The center itself is included.
    pub fn square_around(
        &self,
        center: Position,
        radius: u32,
    ) -> impl Iterator<Item = Position> + '_ {
        let x_range = Self::axis_span(center.x, radius, self.dimensions.width);
        let y_range = Self::axis_span(center.y, radius, self.dimensions.height);
        y_range.flat_map(move |y| x_range.clone().map(move |x| Position::new(x, y)))
    }

    /// Coordinates within `radius` of `center` on an axis of length `extent`,
    /// clipped to `0..extent`.
    fn axis_span(center: i32, radius: u32, extent: u32) -> std::ops::RangeInclusive<i32> {
        let center = i64::from(center);
        let radius = i64::from(radius);
        let low = (center - radius).max(0);
        let high = (center + radius)
            .min(i64::from(extent) - 1)
            .min(i64::from(i32::MAX));
        if low > high {
            // Empty inclusive range.
            return 1..=0;
        }
        low as i32..=high as i32
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::BuiltinArchetype;
    use crate::state::{PlayerId, UnitId};

    fn grid() -> Grid {
        Grid::new(MapDimensions::new(10, 8)).unwrap()
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            Grid::new(MapDimensions::new(0, 8)),
            Err(SetupError::EmptyMap { width: 0, height: 8 })
        ));
    }

    #[test]
    fn occupant_lookup_follows_unit_positions() {
        let grid = grid();
        let units = vec![Unit::new(
            UnitId(7),
            PlayerId::One,
            Position::new(3, 4),
            Arc::new(BuiltinArchetype::Tank.archetype()),
        )];

        assert_eq!(
            grid.occupant_at(&units, Position::new(3, 4)).map(Unit::id),
            Some(UnitId(7))
        );
        assert!(!grid.is_occupied(&units, Position::new(4, 3)));
    }

    #[test]
    fn square_is_clipped_to_bounds() {
        let grid = grid();
        assert_eq!(grid.square_around(Position::new(5, 5), 1).count(), 9);
        assert_eq!(grid.square_around(Position::ORIGIN, 2).count(), 9);
    }

    #[test]
    fn square_clips_each_axis_to_its_own_extent() {
        let corridor = Grid::new(MapDimensions::new(3000, 1)).unwrap();
        let square: Vec<Position> = corridor.square_around(Position::new(1500, 0), 3000).collect();
        assert_eq!(square.len(), 3000);
        assert!(square.iter().all(|position| position.y == 0));

        let grid = grid();
        assert_eq!(grid.square_around(Position::new(9, 7), u32::MAX).count(), 80);
        assert_eq!(grid.square_around(Position::new(20, 20), 2).count(), 0);
    }
}
