//! Strategy trait definition.

use std::fmt;

use crate::domain::{Action, TableState};
use crate::error::AppError;

/// Errors that can occur during decision-making.
#[derive(Debug)]
pub enum AiError {
    /// Strategy encountered an internal error
    Internal(String),
    /// The snapshot violates a precondition the caller must uphold
    InvalidState(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "strategy internal error: {msg}"),
            AiError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("strategy error: {err}"))
    }
}

/// Trait for automated players.
///
/// Implementations receive a read-only table snapshot plus the caller's
/// decline counter and must answer with exactly one [`Action`]. They must
/// not mutate the snapshot and must not perform I/O; the surrounding game
/// loop owns the session and the counter. The counter is incremented by the
/// caller on declines only, never on takes.
pub trait Strategy: Send + Sync {
    fn decide(&self, state: &TableState, turn_counter: u32) -> Result<Action, AiError>;
}
