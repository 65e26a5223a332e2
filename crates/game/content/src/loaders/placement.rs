//! Unit placement loader.
//!
//! Placement entries accept both the snapshot spelling
//! `{archetypeId, x, y, ownerId}` and the level-file spelling
//! `{type, x, y, playerId}`. `pieces.json` maps placement id to
//! `{ "pieces": [ ... ] }`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use skirmish_core::{ArchetypeId, PlacementSpec, PlayerId, Position};

use crate::loaders::{LoadResult, read_json};

#[derive(Debug, Clone, Deserialize)]
struct PlacementRecord {
    #[serde(rename = "archetypeId", alias = "type")]
    archetype: ArchetypeId,
    x: i32,
    y: i32,
    #[serde(rename = "ownerId", alias = "playerId")]
    owner: u8,
}

impl From<PlacementRecord> for PlacementSpec {
    fn from(record: PlacementRecord) -> Self {
        PlacementSpec {
            archetype: record.archetype,
            position: Position::new(record.x, record.y),
            owner: record.owner,
        }
    }
}

/// Loader for unit placements from JSON files.
pub struct PlacementLoader;

impl PlacementLoader {
    /// Load every placement set from `pieces.json`, keyed by placement id.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, Vec<PlacementSpec>>> {
        let value = read_json(path)?;
        let entries = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("Placement catalogue must be a JSON object"))?;

        let mut sets = BTreeMap::new();
        for (key, raw) in entries {
            match raw.get("pieces") {
                Some(pieces) => match Self::from_value(pieces) {
                    Ok(placement) => {
                        sets.insert(key.clone(), placement);
                    }
                    Err(e) => {
                        tracing::warn!(placement = %key, error = %e, "skipping malformed placement set")
                    }
                },
                None => tracing::warn!(placement = %key, "placement set has no pieces list"),
            }
        }
        Ok(sets)
    }

    /// Parses a JSON array of placement entries, dropping malformed ones.
    ///
    /// An entry whose owner is not player 1 or 2 counts as malformed.
    pub fn from_value(value: &Value) -> LoadResult<Vec<PlacementSpec>> {
        let entries = value
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("Placement must be a JSON array"))?;

        let placement = entries
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match PlacementRecord::deserialize(raw) {
                Ok(record) if PlayerId::try_from(record.owner).is_err() => {
                    tracing::warn!(
                        index,
                        owner = record.owner,
                        "skipping placement entry with invalid owner"
                    );
                    None
                }
                Ok(record) => Some(PlacementSpec::from(record)),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed placement entry");
                    None
                }
            })
            .collect();
        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use skirmish_core::{BattleSession, ConfigSnapshot};

    use super::*;

    #[test]
    fn accepts_both_spellings() {
        let value = json!([
            { "archetypeId": "archer", "x": 0, "y": 0, "ownerId": 1 },
            { "type": 4, "x": 9, "y": 7, "playerId": 2 }
        ]);

        let placement = PlacementLoader::from_value(&value).unwrap();
        assert_eq!(
            placement,
            vec![
                PlacementSpec::new("archer", Position::new(0, 0), 1),
                PlacementSpec::new(4u32, Position::new(9, 7), 2),
            ]
        );
    }

    #[test]
    fn drops_malformed_entries() {
        let value = json!([
            { "type": 1, "x": 0, "y": 0 },
            { "type": 1, "x": "left", "y": 0, "playerId": 1 },
            { "type": 2, "x": 1, "y": 0, "playerId": 1 }
        ]);
        let placement = PlacementLoader::from_value(&value).unwrap();
        assert_eq!(placement.len(), 1);
        assert_eq!(placement[0].archetype, ArchetypeId::Numeric(2));
    }

    #[test]
    fn drops_entries_owned_by_unknown_players() {
        let value = json!([
            { "type": 1, "x": 0, "y": 0, "playerId": 1 },
            { "type": 2, "x": 1, "y": 0, "playerId": 3 },
            { "type": 3, "x": 2, "y": 0, "playerId": 0 },
            { "type": 4, "x": 9, "y": 7, "playerId": 2 }
        ]);
        let placement = PlacementLoader::from_value(&value).unwrap();
        assert_eq!(placement.len(), 2);
        assert!(placement.iter().all(|entry| (1..=2).contains(&entry.owner)));

        // What survives still builds a session.
        let snapshot = ConfigSnapshot::empty().with_placement(placement);
        let session = BattleSession::new(&snapshot).unwrap();
        assert_eq!(session.units().len(), 2);
    }

    #[test]
    fn loads_placement_sets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pieces.json");
        fs::write(
            &path,
            r#"{ "1": { "pieces": [ { "type": 1, "x": 0, "y": 0, "playerId": 1 },
                                     { "type": 1, "x": 9, "y": 7, "playerId": 2 } ] },
                 "2": { "name": "no pieces here" } }"#,
        )
        .unwrap();

        let sets = PlacementLoader::load(&path).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets["1"].len(), 2);
    }
}
