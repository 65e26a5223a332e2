//! Data-driven content definitions and loaders.
//!
//! This crate reads the JSON configuration documents a battle is set up from:
//! - Archetype stat tables (`pieceTypes.json`)
//! - Map descriptors (`maps.json`)
//! - Unit placements (`pieces.json`)
//! - The chapter/level catalogue tying maps and placements together (`chapters.json`)
//! - Single-document configuration snapshots
//!
//! Loaders are lenient. A malformed entry is logged and dropped so the engine's
//! fallback chain can take over; only an unreadable or unparsable document is
//! reported as an error.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ArchetypeLoader, Chapter, ChapterLoader, ContentFactory, Level, LevelSetup, MapLoader,
    PlacementLoader, SnapshotLoader,
};
