//! Heuristic — the deterministic rule-based player.
//!
//! One ordered rule list, evaluated top to bottom on every turn; the first
//! matching rule wins. The rules:
//! - Forced take when out of coins.
//! - Always extend an existing run by one (neighbour card).
//! - Refuse the top card (35) early, grab large pots early, grab cheap
//!   cards that carry a decent pot.
//! - Early game (holding <= 4 cards): take cards landing near anything we
//!   already hold while the pot makes it cheap.
//! - Mid/late game (holding > 4 cards): take cards landing within 2 of a
//!   run boundary, but only once an opponent already owns the gap card —
//!   a free gap means the run can still be connected later for less.
//!
//! Determinism:
//! - No randomness, no interior state. Same snapshot and counter in, same
//!   action out.

use super::trait_def::{AiError, Strategy};
use crate::domain::{Action, Hand, TableState, MAX_CARD};

#[derive(Debug, Clone, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    // ---------- Rule helpers (pure, explicit parameters) ----------

    fn distance(a: u8, b: u8) -> u16 {
        (i16::from(a) - i16::from(b)).unsigned_abs()
    }

    /// The offered card sits directly next to one of our run boundaries.
    fn is_neighbour(hand: &Hand, offered: u8) -> bool {
        hand.groups().iter().any(|group| {
            let first = group.first().copied();
            let last = group.last().copied();
            first.is_some_and(|f| Self::distance(f, offered) == 1)
                || last.is_some_and(|l| Self::distance(l, offered) == 1)
        })
    }

    /// Early game: while we hold at most 4 cards and the pot pays at least
    /// part of the price, anything within distance 6 of a held value is
    /// worth accumulating around.
    fn good_card_beginning(hand: &Hand, offered: u8, pot: u32) -> bool {
        if hand.card_count() > 4 || pot <= 3 {
            return false;
        }
        hand.values().any(|v| Self::distance(v, offered) < 6)
    }

    /// Whether the single value between the offered card and the near run
    /// boundary is already owned by an opponent. Only a boundary exactly 2
    /// away leaves such a gap; any other in-range distance counts as
    /// trivially taken.
    fn gap_taken(first: u8, last: u8, offered: u8, others: &[u8]) -> bool {
        if i16::from(first) - i16::from(offered) == 2 && !others.contains(&(first - 1)) {
            return false;
        }
        if i16::from(offered) - i16::from(last) == 2 && !others.contains(&(last + 1)) {
            return false;
        }
        true
    }

    /// Mid/late game: the offered card lands within 2 of a run boundary.
    /// Take it only once the gap card is gone — while the gap is free we
    /// can still connect the run later and the offer will come back
    /// cheaper.
    fn good_card_mid_game(hand: &Hand, offered: u8, others: &[u8]) -> bool {
        if hand.card_count() <= 4 {
            return false;
        }
        for group in hand.groups() {
            let (Some(&first), Some(&last)) = (group.first(), group.last()) else {
                continue;
            };
            let near_boundary = Self::distance(first, offered) < 3
                || Self::distance(last, offered) < 3;
            if near_boundary && Self::gap_taken(first, last, offered, others) {
                return true;
            }
        }
        false
    }
}

impl Strategy for Heuristic {
    fn decide(&self, state: &TableState, turn_counter: u32) -> Result<Action, AiError> {
        let me = state
            .acting_player()
            .ok_or_else(|| AiError::InvalidState("snapshot has no players".into()))?;

        // Out of coins: declining is not possible.
        if me.money == 0 {
            return Ok(Action::TakeCard);
        }

        // Extending a run by one is always card-value free.
        if Self::is_neighbour(&me.hand, state.card) {
            return Ok(Action::TakeCard);
        }

        // The top card is too expensive this early, whatever the pot.
        if state.card == MAX_CARD && turn_counter < 5 {
            return Ok(Action::PlaceCoin);
        }

        // A large pot outweighs the card cost.
        if state.pot > 9 && turn_counter < 7 {
            return Ok(Action::TakeCard);
        }

        // A cheap-ish card with a decent pot.
        if state.pot > 4 && turn_counter < 5 && state.card < 29 {
            return Ok(Action::TakeCard);
        }

        if Self::good_card_beginning(&me.hand, state.card, state.pot) {
            return Ok(Action::TakeCard);
        }

        let others = state.others_cards();
        if Self::good_card_mid_game(&me.hand, state.card, &others) {
            return Ok(Action::TakeCard);
        }

        // The caller counts this decline in its turn counter.
        Ok(Action::PlaceCoin)
    }
}
