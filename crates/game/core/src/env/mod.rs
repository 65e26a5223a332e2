//! Read-only setup data supplied by configuration.
//!
//! Archetype tables, map descriptors and placement lists are produced by the
//! content loaders and bundled into a [`ConfigSnapshot`]. The engine reads
//! them once while building a session and never mutates them.
mod archetypes;
mod map;
mod snapshot;

pub use archetypes::{
    Archetype, ArchetypeId, ArchetypeResolver, ArchetypeTable, BuiltinArchetype, Color,
    ResolutionTier, ResolvedArchetype,
};
pub use map::{MapDescriptor, MapDimensions};
pub use snapshot::{ConfigSnapshot, PlacementSpec};
