//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur when settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// No round is in progress.
    #[error("no round is in progress")]
    InvalidState,
}
