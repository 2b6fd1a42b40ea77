//! Strategy module - automated decision-making.
//!
//! This module provides:
//! - The [`Strategy`] trait the game loop calls once per turn
//! - [`Heuristic`]: the rule-based production player
//! - [`RandomStrategy`]: a seedable random baseline

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomStrategy;
pub use trait_def::{AiError, Strategy};

/// Create a strategy by name.
///
/// Currently supports:
/// - "heuristic": the rule-based player (ignores the seed)
/// - "random": uniform baseline with an optional seed
///
/// Returns None if the name is unrecognized.
pub fn create_strategy(name: &str, seed: Option<u64>) -> Option<Box<dyn Strategy>> {
    match name {
        "heuristic" => Some(Box::new(Heuristic::new())),
        "random" => Some(Box::new(RandomStrategy::new(seed))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_its_strategies() {
        assert!(create_strategy("heuristic", None).is_some());
        assert!(create_strategy("random", Some(1)).is_some());
        assert!(create_strategy("minimax", None).is_none());
    }
}
