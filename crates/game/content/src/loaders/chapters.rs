//! Chapter and level catalogue loader.
//!
//! `chapters.json` maps chapter id to a chapter with an ordered list of
//! levels; each level names the map and placement it is played on.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::loaders::{ConfigKey, LoadResult, read_json};

/// A playable level inside a chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    /// Key into `maps.json`.
    pub map_config: String,
    /// Key into `pieces.json`.
    pub pieces_config: String,
    pub unlocked: bool,
}

/// A named group of levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub name: String,
    pub description: Option<String>,
    pub levels: Vec<Level>,
}

impl Chapter {
    pub fn level(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == id)
    }
}

#[derive(Debug, Deserialize)]
struct ChapterRecord {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    levels: Vec<LevelRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LevelRecord {
    id: u32,
    name: String,
    #[serde(default)]
    description: Option<String>,
    map_config: ConfigKey,
    pieces_config: ConfigKey,
    #[serde(default = "unlocked_by_default")]
    unlocked: bool,
}

fn unlocked_by_default() -> bool {
    true
}

impl From<LevelRecord> for Level {
    fn from(record: LevelRecord) -> Self {
        Level {
            id: record.id,
            name: record.name,
            description: record.description,
            map_config: record.map_config.to_key(),
            pieces_config: record.pieces_config.to_key(),
            unlocked: record.unlocked,
        }
    }
}

/// Loader for the chapter catalogue.
pub struct ChapterLoader;

impl ChapterLoader {
    /// Load all chapters from a JSON file, keyed by chapter id.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, Chapter>> {
        let value = read_json(path)?;
        let records: BTreeMap<String, ChapterRecord> = serde_json::from_value(value)
            .map_err(|e| anyhow::anyhow!("Failed to parse chapters {}: {}", path.display(), e))?;

        let chapters = records
            .into_iter()
            .map(|(key, record)| {
                let chapter = Chapter {
                    name: record.name,
                    description: record.description,
                    levels: record.levels.into_iter().map(Level::from).collect(),
                };
                (key, chapter)
            })
            .collect();
        Ok(chapters)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn loads_chapters_with_numeric_or_text_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.json");
        fs::write(
            &path,
            r#"{ "1": { "name": "Into the Field",
                        "levels": [
                          { "id": 1, "name": "Basic Drill", "mapConfig": 1, "piecesConfig": "1" },
                          { "id": 2, "name": "Skirmish", "mapConfig": "2", "piecesConfig": 2,
                            "unlocked": false }
                        ] } }"#,
        )
        .unwrap();

        let chapters = ChapterLoader::load(&path).unwrap();
        let chapter = &chapters["1"];
        assert_eq!(chapter.levels.len(), 2);

        let second = chapter.level(2).unwrap();
        assert_eq!(second.map_config, "2");
        assert_eq!(second.pieces_config, "2");
        assert!(!second.unlocked);
        assert!(chapter.level(1).unwrap().unlocked);
        assert!(chapter.level(3).is_none());
    }

    #[test]
    fn malformed_catalogue_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapters.json");
        fs::write(&path, r#"{ "1": { "levels": "none" } }"#).unwrap();
        assert!(ChapterLoader::load(&path).is_err());
    }
}
