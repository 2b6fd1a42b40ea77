//! Per-turn table snapshot as seen by the decision engine.

use super::hand::Hand;

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub hand: Hand,
    /// Coins the player currently owns.
    pub money: u32,
}

/// Read-only snapshot of the table for exactly one decision.
///
/// The acting player (the bot) sits at index 0 of `players`; this matches
/// the game server's wire convention. The snapshot is discarded after the
/// corresponding action has been submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// The card currently on offer.
    pub card: u8,
    /// Coins accumulated on the offered card.
    pub pot: u32,
    pub finished: bool,
    pub players: Vec<PlayerState>,
}

impl TableState {
    /// The player whose turn it is to decide.
    pub fn acting_player(&self) -> Option<&PlayerState> {
        self.players.first()
    }

    /// Flattened card values held by everyone except the acting player.
    ///
    /// Recomputed from the snapshot on every call; the table changes every
    /// turn, so this must never be cached across turns.
    pub fn others_cards(&self) -> Vec<u8> {
        self.players
            .iter()
            .skip(1)
            .flat_map(|p| p.hand.values())
            .collect()
    }
}

/// The one move the game allows: take the offered card (and its pot) or pay
/// a coin into the pot and pass the decision on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TakeCard,
    PlaceCoin,
}

impl Action {
    pub fn takes_card(self) -> bool {
        matches!(self, Action::TakeCard)
    }
}
