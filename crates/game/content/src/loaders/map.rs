//! Map descriptor loader.
//!
//! Reads `maps.json`, an object mapping map id to `{width, height, tileSize}`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use skirmish_core::{BattleConfig, MapDescriptor};

use crate::loaders::{LoadResult, read_json};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapRecord {
    width: u32,
    height: u32,
    #[serde(default = "default_tile_size")]
    tile_size: u32,
}

fn default_tile_size() -> u32 {
    BattleConfig::DEFAULT_TILE_SIZE
}

/// Loader for map descriptors from JSON files.
pub struct MapLoader;

impl MapLoader {
    /// Load every map descriptor from a JSON file, keyed by map id.
    ///
    /// Malformed descriptors are logged and left out.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, MapDescriptor>> {
        let value = read_json(path)?;
        let entries = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("Map catalogue must be a JSON object"))?;

        let mut maps = BTreeMap::new();
        for (key, raw) in entries {
            match Self::descriptor_from_value(raw) {
                Ok(descriptor) => {
                    maps.insert(key.clone(), descriptor);
                }
                Err(e) => tracing::warn!(map = %key, error = %e, "skipping malformed map entry"),
            }
        }
        Ok(maps)
    }

    /// Parses a single `{width, height, tileSize}` descriptor.
    ///
    /// Zero width or height counts as malformed.
    pub fn descriptor_from_value(value: &Value) -> LoadResult<MapDescriptor> {
        let record = MapRecord::deserialize(value)
            .map_err(|e| anyhow::anyhow!("Failed to parse map descriptor: {}", e))?;

        if record.width == 0 || record.height == 0 {
            anyhow::bail!(
                "Map descriptor has empty dimensions {}x{}",
                record.width,
                record.height
            );
        }

        Ok(MapDescriptor::new(record.width, record.height, record.tile_size))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;

    use super::*;

    #[test]
    fn parses_descriptor_with_default_tile_size() {
        let descriptor = MapLoader::descriptor_from_value(&json!({ "width": 12, "height": 9 })).unwrap();
        assert_eq!(descriptor, MapDescriptor::new(12, 9, 80));
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(MapLoader::descriptor_from_value(&json!({ "width": 0, "height": 9 })).is_err());
        assert!(MapLoader::descriptor_from_value(&json!({ "width": "wide" })).is_err());
    }

    #[test]
    fn loads_catalogue_and_skips_bad_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps.json");
        fs::write(
            &path,
            r#"{ "1": { "width": 10, "height": 8, "tileSize": 64 },
                 "2": { "width": 0, "height": 8 } }"#,
        )
        .unwrap();

        let maps = MapLoader::load(&path).unwrap();
        assert_eq!(maps.len(), 1);
        assert_eq!(maps["1"].tile_size, 64);
    }
}
