//! Automated player for the "Take it or Pay" card game.
//!
//! The interesting part lives in [`ai`]: a pure, stateless decision engine
//! that looks at one table snapshot per turn and answers "take the card or
//! pay a coin". Everything else is a thin shell around it: [`api`] talks to
//! the game server, [`runner`] sequences fetch-decide-submit until the game
//! is finished.

pub mod ai;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod runner;

pub use error::AppError;
