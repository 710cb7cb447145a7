//! Domain error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// All failures are deterministic given the same input; building a statement
/// aborts on the first one. Message formatting for end users belongs to the
/// presentation layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative audience).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A performance referenced a play id absent from the catalog.
    #[error("unresolved play: {0}")]
    UnresolvedPlay(PlayId),

    /// No pricing rules are registered for the play's genre.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// A domain invariant was violated (e.g. arithmetic overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unresolved_play(play_id: PlayId) -> Self {
        Self::UnresolvedPlay(play_id)
    }

    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
