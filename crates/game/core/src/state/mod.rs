//! Authoritative battle state representation.
//!
//! This module owns the grid, unit and identifier types. Presentation layers
//! read this state through the session but mutate it exclusively through the
//! engine.
mod error;
pub mod types;

pub use error::SetupError;
pub use types::{ActionFlags, Grid, PlayerId, Position, Unit, UnitId};
