//! Deterministic battle engine for two-player grid skirmishes.
//!
//! `skirmish-core` defines the canonical rules (archetypes, damage, movement
//! and attack footprints, turn cycling, win conditions) and exposes a pure,
//! synchronous API. All state mutation flows through
//! [`engine::BattleSession`]; presentation layers feed it grid coordinates and
//! render the [`engine::BattleEvent`]s it returns.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use combat::DamageOutcome;
pub use config::BattleConfig;
pub use engine::{
    BattleEvent, BattleSession, BattleSetup, InputOutcome, Outcome, Phase, SessionError, UnitSpec,
};
pub use env::{
    Archetype, ArchetypeId, ArchetypeResolver, ArchetypeTable, BuiltinArchetype, Color,
    ConfigSnapshot, MapDescriptor, MapDimensions, PlacementSpec, ResolutionTier,
    ResolvedArchetype,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{ActionFlags, Grid, PlayerId, Position, SetupError, Unit, UnitId};
