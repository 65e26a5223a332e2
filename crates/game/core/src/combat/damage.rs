//! Damage calculation and application.

use crate::config::BattleConfig;

/// Result of a single hit on a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    pub actual_damage: u32,
    pub died: bool,
}

/// Calculate the damage an attack deals.
///
/// # Formula
///
/// ```text
/// final_damage = max(MINIMUM_DAMAGE, attack - defense)
/// ```
///
/// Defense can never reduce a hit below [`BattleConfig::MINIMUM_DAMAGE`].
pub fn calculate_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(BattleConfig::MINIMUM_DAMAGE)
}

/// Apply damage to current HP, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
