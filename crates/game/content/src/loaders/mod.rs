//! Content loaders for reading game data from files.
//!
//! Each loader has a `load(path)` entry point for whole documents and a
//! `from_value` companion that works on an already parsed JSON value, so the
//! snapshot loader can reuse them for its sub-sections.

pub mod archetypes;
pub mod chapters;
pub mod factory;
pub mod map;
pub mod placement;
pub mod snapshot;

pub use archetypes::ArchetypeLoader;
pub use chapters::{Chapter, ChapterLoader, Level};
pub use factory::{ContentFactory, LevelSetup};
pub use map::MapLoader;
pub use placement::PlacementLoader;
pub use snapshot::SnapshotLoader;

use std::path::Path;

use serde_json::Value;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a JSON document.
pub(crate) fn read_json(path: &Path) -> LoadResult<Value> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON {}: {}", path.display(), e))
}

/// Config documents key their entries by id; ids may be written as numbers
/// or strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum ConfigKey {
    Number(u64),
    Text(String),
}

impl ConfigKey {
    pub(crate) fn to_key(&self) -> String {
        match self {
            ConfigKey::Number(n) => n.to_string(),
            ConfigKey::Text(s) => s.clone(),
        }
    }
}
