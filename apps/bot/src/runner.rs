//! Fetch-decide-submit loop for one game session.

use tracing::info;

use crate::ai::Strategy;
use crate::api::GameClient;
use crate::domain::{Action, TableState};
use crate::error::AppError;

/// Outcome of a finished game, from the bot's point of view.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub game_id: String,
    /// Decisions submitted (takes and declines).
    pub turns: u32,
    /// Card penalty minus remaining coins; lower is better.
    pub final_score: i32,
    pub final_money: u32,
}

pub struct GameRunner {
    client: GameClient,
    strategy: Box<dyn Strategy>,
}

/// Declines advance the decline counter; takes do not.
fn advance_counter(counter: u32, action: Action) -> u32 {
    match action {
        Action::TakeCard => counter,
        Action::PlaceCoin => counter + 1,
    }
}

impl GameRunner {
    pub fn new(client: GameClient, strategy: Box<dyn Strategy>) -> Self {
        Self { client, strategy }
    }

    /// Play one game to completion.
    ///
    /// Exactly one decision is computed and submitted per snapshot; each
    /// snapshot is dropped as soon as the server answers with the next one.
    /// Any transport failure ends the session.
    pub async fn run(&self) -> Result<GameSummary, AppError> {
        let created = self.client.create_game().await?;
        let game_id = created.game_id;
        info!(game_id = %game_id, "game created");

        let mut state = TableState::try_from(created.status)?;
        let mut turn_counter: u32 = 1;
        let mut turns: u32 = 0;

        while !state.finished {
            let action = self.strategy.decide(&state, turn_counter)?;
            info!(
                card = state.card,
                pot = state.pot,
                turn_counter,
                take = action.takes_card(),
                "turn decided"
            );

            let response = self.client.post_action(&game_id, action).await?;
            turn_counter = advance_counter(turn_counter, action);
            turns += 1;
            state = TableState::try_from(response.status)?;
        }

        let me = state
            .acting_player()
            .ok_or_else(|| AppError::invalid_state("final snapshot has no players".into()))?;
        let final_score = me.hand.score() as i32 - me.money as i32;

        Ok(GameSummary {
            game_id,
            turns,
            final_score,
            final_money: me.money,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_declines_advance_the_counter() {
        let mut counter = 1;
        counter = advance_counter(counter, Action::PlaceCoin);
        counter = advance_counter(counter, Action::TakeCard);
        counter = advance_counter(counter, Action::PlaceCoin);
        assert_eq!(counter, 3);
    }
}
