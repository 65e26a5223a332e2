//! Combat resolution.
//!
//! Pure functions implementing the damage law. Units call into these when
//! they take a hit; the session never computes damage on its own.

pub mod damage;

pub use damage::{DamageOutcome, apply_damage, calculate_damage};
