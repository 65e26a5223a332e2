//! Archetype table loader.
//!
//! Reads `pieceTypes.json`: an object mapping identifier (numeric string or
//! legacy name) to a stat record.
//!
//! ```json
//! { "1": { "hp": 120, "attack": 30, "defense": 20, "range": 1,
//!          "moveRange": 3, "name": "Warrior", "color": "4169E1" } }
//! ```

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use skirmish_core::{Archetype, ArchetypeTable, Color};

use crate::loaders::{LoadResult, read_json};

/// Stat record as written in configuration files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArchetypeRecord {
    hp: u32,
    attack: u32,
    defense: u32,
    range: u32,
    move_range: u32,
    name: String,
    color: ColorField,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColorField {
    Hex(String),
    Value(u32),
}

impl ArchetypeRecord {
    fn into_archetype(self) -> Option<Archetype> {
        let color = match self.color {
            ColorField::Hex(text) => Color::from_hex(&text)?,
            ColorField::Value(value) => Color(value),
        };
        Some(Archetype {
            max_hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            attack_range: self.range,
            move_range: self.move_range,
            display_name: self.name,
            color,
        })
    }
}

/// Loader for archetype tables from JSON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load an archetype table from a JSON file.
    ///
    /// Fails only if the file cannot be read or is not a JSON object.
    pub fn load(path: &Path) -> LoadResult<ArchetypeTable> {
        let value = read_json(path)?;
        Self::from_value(&value)
    }

    /// Builds a table from a parsed JSON object, skipping malformed entries.
    pub fn from_value(value: &Value) -> LoadResult<ArchetypeTable> {
        let entries = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("Archetype table must be a JSON object"))?;

        let mut table = ArchetypeTable::new();
        for (key, raw) in entries {
            let archetype = ArchetypeRecord::deserialize(raw)
                .map_err(|e| e.to_string())
                .and_then(|record| {
                    record
                        .into_archetype()
                        .ok_or_else(|| "color is not a hex value".to_string())
                });

            match archetype {
                Ok(archetype) => {
                    table.insert(key.clone(), archetype);
                }
                Err(reason) => {
                    tracing::warn!(archetype = %key, %reason, "skipping malformed archetype entry");
                }
            }
        }

        tracing::debug!(count = table.len(), "loaded archetype table");
        Ok(table)
    }
}
