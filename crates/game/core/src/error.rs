//! Common error infrastructure for skirmish-core.
//!
//! Domain errors (`SetupError`, `SessionError`) live next to the code that
//! produces them. This module holds the classification they share.
//!
//! Illegal grid input is deliberately absent from every error type: the
//! selection state machine absorbs it as a no-op or a selection cancel.

/// Severity level of an error, used for categorization in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: input after the match ended.
    Validation,

    /// Setup data violates an engine invariant; no session can be built.
    ///
    /// Examples: two units on one tile, an archetype with zero max HP.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all skirmish-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
