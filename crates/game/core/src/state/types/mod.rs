pub mod common;
pub mod grid;
pub mod unit;

pub use common::{PlayerId, Position, UnitId};
pub use grid::Grid;
pub use unit::{ActionFlags, Unit};
