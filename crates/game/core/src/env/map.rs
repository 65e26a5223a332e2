use crate::config::BattleConfig;
use crate::state::Position;

/// Width and height of the battlefield in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Map settings supplied by configuration.
///
/// `tile_size` is carried for the presentation layer only; the engine never
/// reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDescriptor {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
}

impl MapDescriptor {
    pub const fn new(width: u32, height: u32, tile_size: u32) -> Self {
        Self {
            width,
            height,
            tile_size,
        }
    }

    pub const fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }
}

impl Default for MapDescriptor {
    fn default() -> Self {
        Self::new(
            BattleConfig::DEFAULT_MAP_WIDTH,
            BattleConfig::DEFAULT_MAP_HEIGHT,
            BattleConfig::DEFAULT_TILE_SIZE,
        )
    }
}
