use std::fmt;

use crate::state::PlayerId;

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(PlayerId),
    /// Both sides eliminated at once. Unreachable with single-target attacks.
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Where the selection state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Nothing selected.
    #[default]
    Idle,
    /// A friendly unit is selected; legal moves and attacks are precomputed.
    UnitSelected,
    /// The selected unit moved this turn and may still attack.
    PendingAttack,
    /// Terminal. No further input is accepted.
    GameOver(Outcome),
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }

    pub fn has_selection(self) -> bool {
        matches!(self, Phase::UnitSelected | Phase::PendingAttack)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::UnitSelected => "unit_selected",
            Phase::PendingAttack => "pending_attack",
            Phase::GameOver(_) => "game_over",
        }
    }
}
