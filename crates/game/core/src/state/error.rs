//! Setup errors.
//!
//! Raised while turning a configuration snapshot into a battle. Every variant
//! is an invariant the engine relies on afterwards, so none are recoverable.

use crate::env::MapDimensions;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, UnitId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("map dimensions {width}x{height} must both be positive")]
    EmptyMap { width: u32, height: u32 },

    #[error("unit placed at {position} is outside the {}x{} map", .dimensions.width, .dimensions.height)]
    PositionOutOfBounds {
        position: Position,
        dimensions: MapDimensions,
    },

    #[error("position {position} is already occupied by unit {occupant}")]
    PositionOccupied { position: Position, occupant: UnitId },

    #[error("unit at {position} has owner {owner}, expected 1 or 2")]
    InvalidOwner { position: Position, owner: u8 },

    #[error("archetype '{archetype}' for unit at {position} has zero max HP")]
    ZeroMaxHp { position: Position, archetype: String },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use SetupError::*;
        match self {
            EmptyMap { .. } => "SETUP_EMPTY_MAP",
            PositionOutOfBounds { .. } => "SETUP_POSITION_OUT_OF_BOUNDS",
            PositionOccupied { .. } => "SETUP_POSITION_OCCUPIED",
            InvalidOwner { .. } => "SETUP_INVALID_OWNER",
            ZeroMaxHp { .. } => "SETUP_ZERO_MAX_HP",
        }
    }
}
