//! Domain layer: pure game types and helpers, no I/O.

pub mod errors;
pub mod hand;
pub mod state;

pub use errors::DomainError;
pub use hand::Hand;
pub use state::{Action, PlayerState, TableState};

/// Lowest card value in the deck.
pub const MIN_CARD: u8 = 3;
/// Highest card value in the deck.
pub const MAX_CARD: u8 = 35;
