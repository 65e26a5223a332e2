//! Error types for the battle session.

use super::Outcome;
use crate::error::{ErrorSeverity, GameError};

/// Input the session refuses outright.
///
/// Illegal grid coordinates are not errors; see [`super::BattleSession::submit_input`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    #[error("the match is over ({outcome}); no further input is accepted")]
    GameOver { outcome: Outcome },
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::GameOver { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::GameOver { .. } => "SESSION_GAME_OVER",
        }
    }
}
