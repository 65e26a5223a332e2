//! Single-document configuration snapshot loader.
//!
//! ```json
//! {
//!   "archetypes":    { "archer": { "hp": 90, ... } },
//!   "mapDescriptor": { "width": 10, "height": 8, "tileSize": 80 },
//!   "placement":     [ { "archetypeId": "archer", "x": 0, "y": 0, "ownerId": 1 } ]
//! }
//! ```
//!
//! Every section is optional. A section that is present but malformed is
//! logged and treated as absent so the engine applies its defaults.

use std::path::Path;

use serde_json::Value;
use skirmish_core::ConfigSnapshot;

use crate::loaders::{
    ArchetypeLoader, LoadResult, MapLoader, PlacementLoader, read_file,
};

/// Loader for whole configuration snapshots.
pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn load(path: &Path) -> LoadResult<ConfigSnapshot> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    /// Parses a snapshot document.
    ///
    /// Fails only when the text is not a JSON object.
    pub fn from_str(content: &str) -> LoadResult<ConfigSnapshot> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse snapshot: {}", e))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> LoadResult<ConfigSnapshot> {
        let document = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("Snapshot must be a JSON object"))?;

        let archetypes = document.get("archetypes").and_then(|section| {
            ArchetypeLoader::from_value(section)
                .inspect_err(|e| tracing::warn!(error = %e, "ignoring archetypes section"))
                .ok()
        });

        let map = document.get("mapDescriptor").and_then(|section| {
            MapLoader::descriptor_from_value(section)
                .inspect_err(|e| tracing::warn!(error = %e, "ignoring mapDescriptor section"))
                .ok()
        });

        let placement = document.get("placement").and_then(|section| {
            PlacementLoader::from_value(section)
                .inspect_err(|e| tracing::warn!(error = %e, "ignoring placement section"))
                .ok()
        });

        Ok(ConfigSnapshot {
            archetypes,
            map,
            placement,
        })
    }
}
