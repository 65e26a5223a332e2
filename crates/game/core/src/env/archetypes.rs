//! Archetype definitions and identifier resolution.
//!
//! An [`Archetype`] is the immutable stat template a unit is built from. Units
//! name their archetype through an [`ArchetypeId`], which may be a numeric id
//! or a legacy string name. Resolution walks a fixed chain of
//! [`ResolutionTier`]s: the loaded table by id, the loaded table by legacy
//! name, the built-in table by name, and finally the built-in warrior.

use std::collections::BTreeMap;
use std::fmt;

/// RGB color used by the presentation layer to tint a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Parses a hex color such as `"4169E1"`, `"0x4169E1"` or `"#4169E1"`.
    pub fn from_hex(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .or_else(|| trimmed.strip_prefix('#'))
            .unwrap_or(trimmed);
        if digits.is_empty() {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Immutable stat template shared by every unit of the same kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Radius of the square attack footprint.
    pub attack_range: u32,
    /// Manhattan radius of the movement footprint.
    pub move_range: u32,
    pub display_name: String,
    pub color: Color,
}

/// Identifier a placement entry uses to name its archetype.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ArchetypeId {
    Numeric(u32),
    Name(String),
}

impl ArchetypeId {
    pub fn name(name: impl Into<String>) -> Self {
        ArchetypeId::Name(name.into())
    }

    /// Key used to look the identifier up by id in a loaded table.
    ///
    /// Names that read as integers count as ids, like numeric identifiers do.
    pub fn id_key(&self) -> Option<String> {
        match self {
            ArchetypeId::Numeric(id) => Some(id.to_string()),
            ArchetypeId::Name(name) => name.trim().parse::<u32>().ok().map(|_| name.clone()),
        }
    }

    /// Legacy string name for this identifier.
    ///
    /// Numeric ids 1..=5 map onto the built-in names; other numeric ids have
    /// no legacy name.
    pub fn legacy_name(&self) -> Option<String> {
        match self {
            ArchetypeId::Numeric(id) => BuiltinArchetype::from_type_id(*id).map(|b| b.to_string()),
            ArchetypeId::Name(name) => match name.trim().parse::<u32>() {
                Ok(id) => BuiltinArchetype::from_type_id(id).map(|b| b.to_string()),
                Err(_) => Some(name.clone()),
            },
        }
    }
}

impl From<u32> for ArchetypeId {
    fn from(id: u32) -> Self {
        ArchetypeId::Numeric(id)
    }
}

impl From<&str> for ArchetypeId {
    fn from(name: &str) -> Self {
        ArchetypeId::Name(name.to_string())
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchetypeId::Numeric(id) => write!(f, "{id}"),
            ArchetypeId::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// The hard-coded archetypes used when configuration is missing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BuiltinArchetype {
    Warrior,
    Archer,
    Mage,
    Tank,
    Knight,
}

impl BuiltinArchetype {
    /// Maps a placement type id (1..=5) to its built-in archetype.
    pub fn from_type_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(BuiltinArchetype::Warrior),
            2 => Some(BuiltinArchetype::Archer),
            3 => Some(BuiltinArchetype::Mage),
            4 => Some(BuiltinArchetype::Tank),
            5 => Some(BuiltinArchetype::Knight),
            _ => None,
        }
    }

    pub fn type_id(self) -> u32 {
        match self {
            BuiltinArchetype::Warrior => 1,
            BuiltinArchetype::Archer => 2,
            BuiltinArchetype::Mage => 3,
            BuiltinArchetype::Tank => 4,
            BuiltinArchetype::Knight => 5,
        }
    }

    pub fn archetype(self) -> Archetype {
        let (max_hp, attack, defense, attack_range, move_range, display_name, color) = match self {
            BuiltinArchetype::Warrior => (120, 30, 20, 1, 3, "Warrior", 0x4169E1),
            BuiltinArchetype::Archer => (90, 35, 10, 4, 2, "Archer", 0x32CD32),
            BuiltinArchetype::Mage => (80, 40, 8, 3, 2, "Mage", 0x9932CC),
            BuiltinArchetype::Tank => (180, 25, 30, 1, 2, "Tank", 0x8B4513),
            BuiltinArchetype::Knight => (100, 35, 15, 1, 4, "Knight", 0xFFD700),
        };
        Archetype {
            max_hp,
            attack,
            defense,
            attack_range,
            move_range,
            display_name: display_name.to_string(),
            color: Color(color),
        }
    }
}

/// Which step of the fallback chain produced an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionTier {
    ConfigById,
    ConfigByLegacyName,
    BuiltinByName,
    BuiltinFallback,
}

/// Archetype together with the tier that resolved it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedArchetype {
    pub archetype: Archetype,
    pub tier: ResolutionTier,
}

/// Archetypes loaded from configuration, keyed by identifier string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeTable {
    entries: BTreeMap<String, Archetype>,
}

impl ArchetypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, archetype: Archetype) -> Option<Archetype> {
        self.entries.insert(key.into(), archetype)
    }

    pub fn get(&self, key: &str) -> Option<&Archetype> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

/// Resolves identifiers against an optional loaded table.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArchetypeResolver<'a> {
    loaded: Option<&'a ArchetypeTable>,
}

impl<'a> ArchetypeResolver<'a> {
    pub fn new(loaded: Option<&'a ArchetypeTable>) -> Self {
        Self { loaded }
    }

    /// Resolves `id` through the fallback chain. Never fails.
    pub fn resolve(&self, id: &ArchetypeId) -> ResolvedArchetype {
        if let Some(table) = self.loaded {
            if let Some(archetype) = id.id_key().and_then(|key| table.get(&key)) {
                return ResolvedArchetype {
                    archetype: archetype.clone(),
                    tier: ResolutionTier::ConfigById,
                };
            }
            if let Some(archetype) = id.legacy_name().and_then(|name| table.get(&name)) {
                tracing::warn!(archetype = %id, "archetype matched configuration by legacy name");
                return ResolvedArchetype {
                    archetype: archetype.clone(),
                    tier: ResolutionTier::ConfigByLegacyName,
                };
            }
        }

        if let Some(builtin) = id
            .legacy_name()
            .and_then(|name| name.parse::<BuiltinArchetype>().ok())
        {
            if self.loaded.is_some() {
                tracing::warn!(archetype = %id, "archetype missing from configuration, using built-in stats");
            }
            return ResolvedArchetype {
                archetype: builtin.archetype(),
                tier: ResolutionTier::BuiltinByName,
            };
        }

        tracing::warn!(archetype = %id, "unknown archetype, falling back to warrior");
        ResolvedArchetype {
            archetype: BuiltinArchetype::Warrior.archetype(),
            tier: ResolutionTier::BuiltinFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use strum::IntoEnumIterator;

    use super::*;

    fn custom(max_hp: u32, name: &str) -> Archetype {
        Archetype {
            max_hp,
            attack: 1,
            defense: 1,
            attack_range: 1,
            move_range: 1,
            display_name: name.to_string(),
            color: Color(0),
        }
    }

    #[test]
    fn builtin_table_matches_reference_stats() {
        let warrior = BuiltinArchetype::Warrior.archetype();
        assert_eq!(
            (warrior.max_hp, warrior.attack, warrior.defense, warrior.attack_range, warrior.move_range),
            (120, 30, 20, 1, 3)
        );
        let archer = BuiltinArchetype::Archer.archetype();
        assert_eq!((archer.attack, archer.attack_range), (35, 4));
        assert_eq!(BuiltinArchetype::iter().count(), 5);
    }

    #[test]
    fn type_ids_map_to_builtin_names() {
        for builtin in BuiltinArchetype::iter() {
            assert_eq!(BuiltinArchetype::from_type_id(builtin.type_id()), Some(builtin));
        }
        assert_eq!(ArchetypeId::Numeric(4).legacy_name().as_deref(), Some("tank"));
        assert_eq!(ArchetypeId::Numeric(9).legacy_name(), None);
    }

    #[test]
    fn loaded_table_by_id_wins() {
        let mut table = ArchetypeTable::new();
        table.insert("2", custom(55, "Sniper"));
        table.insert("archer", custom(66, "Bowman"));

        let resolved = ArchetypeResolver::new(Some(&table)).resolve(&ArchetypeId::Numeric(2));
        assert_eq!(resolved.tier, ResolutionTier::ConfigById);
        assert_eq!(resolved.archetype.max_hp, 55);
    }

    #[test]
    fn loaded_table_by_legacy_name_is_second() {
        let mut table = ArchetypeTable::new();
        table.insert("archer", custom(66, "Bowman"));

        let resolver = ArchetypeResolver::new(Some(&table));
        let by_number = resolver.resolve(&ArchetypeId::Numeric(2));
        assert_eq!(by_number.tier, ResolutionTier::ConfigByLegacyName);
        assert_eq!(by_number.archetype.max_hp, 66);

        let by_name = resolver.resolve(&ArchetypeId::name("archer"));
        assert_eq!(by_name.tier, ResolutionTier::ConfigByLegacyName);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn resolve_capturing(table: &ArchetypeTable, id: &ArchetypeId) -> (ResolutionTier, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let tier = tracing::subscriber::with_default(subscriber, || {
            ArchetypeResolver::new(Some(table)).resolve(id).tier
        });
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (tier, output)
    }

    #[test]
    fn every_tier_below_config_by_id_warns() {
        let mut table = ArchetypeTable::new();
        table.insert("1", custom(130, "Veteran"));
        table.insert("archer", custom(66, "Bowman"));

        let (tier, logs) = resolve_capturing(&table, &ArchetypeId::Numeric(1));
        assert_eq!(tier, ResolutionTier::ConfigById);
        assert!(!logs.contains("WARN"));

        let (tier, logs) = resolve_capturing(&table, &ArchetypeId::Numeric(2));
        assert_eq!(tier, ResolutionTier::ConfigByLegacyName);
        assert!(logs.contains("WARN") && logs.contains("legacy name"));

        let (tier, logs) = resolve_capturing(&table, &ArchetypeId::name("mage"));
        assert_eq!(tier, ResolutionTier::BuiltinByName);
        assert!(logs.contains("WARN"));

        let (tier, logs) = resolve_capturing(&table, &ArchetypeId::name("dragon"));
        assert_eq!(tier, ResolutionTier::BuiltinFallback);
        assert!(logs.contains("WARN"));
    }

    #[test]
    fn builtin_by_name_when_configuration_lacks_entry() {
        let table = ArchetypeTable::new();
        let resolved = ArchetypeResolver::new(Some(&table)).resolve(&ArchetypeId::name("mage"));
        assert_eq!(resolved.tier, ResolutionTier::BuiltinByName);
        assert_eq!(resolved.archetype, BuiltinArchetype::Mage.archetype());

        let unloaded = ArchetypeResolver::new(None).resolve(&ArchetypeId::Numeric(5));
        assert_eq!(unloaded.tier, ResolutionTier::BuiltinByName);
        assert_eq!(unloaded.archetype, BuiltinArchetype::Knight.archetype());
    }

    #[test]
    fn unknown_identifier_falls_back_to_warrior() {
        let resolver = ArchetypeResolver::new(None);
        for id in [ArchetypeId::name("dragon"), ArchetypeId::Numeric(42)] {
            let resolved = resolver.resolve(&id);
            assert_eq!(resolved.tier, ResolutionTier::BuiltinFallback);
            assert_eq!(resolved.archetype, BuiltinArchetype::Warrior.archetype());
        }
    }

    #[test]
    fn hex_colors_accept_common_prefixes() {
        assert_eq!(Color::from_hex("4169E1"), Some(Color(0x4169E1)));
        assert_eq!(Color::from_hex("0xff4444"), Some(Color(0xFF4444)));
        assert_eq!(Color::from_hex("#32CD32"), Some(Color(0x32CD32)));
        assert_eq!(Color::from_hex("teal"), None);
        assert_eq!(Color::from_hex(""), None);
    }
}
