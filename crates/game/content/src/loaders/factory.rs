//! Content factory for building configuration snapshots from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use skirmish_core::{ArchetypeTable, ConfigSnapshot, MapDescriptor, PlacementSpec};

use crate::loaders::{
    ArchetypeLoader, Chapter, ChapterLoader, LoadResult, MapLoader, PlacementLoader,
};

/// Map and placement a level is played with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSetup {
    pub name: String,
    pub map: MapDescriptor,
    pub placement: Vec<PlacementSpec>,
}

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── pieceTypes.json
/// ├── maps.json
/// ├── pieces.json
/// └── chapters.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const ARCHETYPES_FILE: &'static str = "pieceTypes.json";
    pub const MAPS_FILE: &'static str = "maps.json";
    pub const PLACEMENTS_FILE: &'static str = "pieces.json";
    pub const CHAPTERS_FILE: &'static str = "chapters.json";

    pub const DEFAULT_CHAPTER: u32 = 1;
    pub const DEFAULT_LEVEL: u32 = 1;

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the archetype table from `pieceTypes.json`.
    pub fn load_archetypes(&self) -> LoadResult<ArchetypeTable> {
        ArchetypeLoader::load(&self.data_dir.join(Self::ARCHETYPES_FILE))
    }

    /// Load map descriptors from `maps.json`.
    pub fn load_maps(&self) -> LoadResult<BTreeMap<String, MapDescriptor>> {
        MapLoader::load(&self.data_dir.join(Self::MAPS_FILE))
    }

    /// Load placement sets from `pieces.json`.
    pub fn load_placements(&self) -> LoadResult<BTreeMap<String, Vec<PlacementSpec>>> {
        PlacementLoader::load(&self.data_dir.join(Self::PLACEMENTS_FILE))
    }

    /// Load the chapter catalogue from `chapters.json`.
    pub fn load_chapters(&self) -> LoadResult<BTreeMap<String, Chapter>> {
        ChapterLoader::load(&self.data_dir.join(Self::CHAPTERS_FILE))
    }

    /// Resolves a chapter/level pair to the map and placement it names.
    ///
    /// # Errors
    ///
    /// Fails if any catalogue cannot be read or any reference along the
    /// chain (chapter, level, map id, placement id) is unknown.
    pub fn resolve_level(&self, chapter: u32, level: u32) -> LoadResult<LevelSetup> {
        let chapters = self.load_chapters()?;
        let chapter_entry = chapters
            .get(&chapter.to_string())
            .ok_or_else(|| anyhow::anyhow!("Chapter {} not found", chapter))?;
        let level_entry = chapter_entry
            .level(level)
            .ok_or_else(|| anyhow::anyhow!("Level {} not found in chapter {}", level, chapter))?;

        let map = self
            .load_maps()?
            .remove(&level_entry.map_config)
            .ok_or_else(|| anyhow::anyhow!("Map config {} not found", level_entry.map_config))?;

        let placement = self
            .load_placements()?
            .remove(&level_entry.pieces_config)
            .ok_or_else(|| {
                anyhow::anyhow!("Pieces config {} not found", level_entry.pieces_config)
            })?;

        Ok(LevelSetup {
            name: level_entry.name.clone(),
            map,
            placement,
        })
    }

    /// Builds the configuration snapshot for a level.
    ///
    /// Never fails. A broken level chain leaves both map and placement empty
    /// so the engine plays the default board; a missing archetype table only
    /// disables the configured resolution tiers.
    pub fn level_snapshot(&self, chapter: u32, level: u32) -> ConfigSnapshot {
        let mut snapshot = ConfigSnapshot::empty();

        match self.load_archetypes() {
            Ok(table) => snapshot.archetypes = Some(table),
            Err(e) => tracing::warn!(error = %e, "archetype table unavailable"),
        }

        match self.resolve_level(chapter, level) {
            Ok(setup) => {
                tracing::info!(chapter, level, name = %setup.name, "loaded level");
                snapshot.map = Some(setup.map);
                snapshot.placement = Some(setup.placement);
            }
            Err(e) => {
                tracing::warn!(chapter, level, error = %e, "level unavailable, using defaults")
            }
        }

        snapshot
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
