//! Random baseline strategy.
//!
//! Chooses uniformly between the legal actions; useful as a floor when
//! evaluating the heuristic in the simulator, and seedable for tests.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, Strategy};
use crate::domain::{Action, TableState};

pub struct RandomStrategy {
    /// `Strategy` methods take `&self`, so the RNG lives behind a mutex.
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    pub const NAME: &'static str = "RandomStrategy";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible behaviour, `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Strategy for RandomStrategy {
    fn decide(&self, state: &TableState, _turn_counter: u32) -> Result<Action, AiError> {
        let me = state
            .acting_player()
            .ok_or_else(|| AiError::InvalidState("snapshot has no players".into()))?;

        // Declining costs a coin, so a coinless player has one legal action.
        if me.money == 0 {
            return Ok(Action::TakeCard);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        Ok(if rng.random_bool(0.5) {
            Action::TakeCard
        } else {
            Action::PlaceCoin
        })
    }
}
