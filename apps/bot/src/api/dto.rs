//! Wire format of the game server, kept separate from the domain types.
//!
//! The server's `status.money` is the pot on the offered card; the per-player
//! `money` is that player's coins. The authenticated bot is `players[0]`.

use serde::{Deserialize, Serialize};

use crate::domain::{Action, Hand, PlayerState, TableState};
use crate::error::AppError;

/// Response to creating a game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreated {
    pub game_id: String,
    pub status: StatusDto,
}

/// Response to posting an action.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionResponse {
    pub status: StatusDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusDto {
    /// The card currently on offer.
    pub card: u8,
    /// Coins accumulated on the offered card (the pot).
    pub money: u32,
    pub finished: bool,
    pub players: Vec<PlayerDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDto {
    #[serde(default)]
    pub name: Option<String>,
    /// Coins this player owns.
    pub money: u32,
    /// Card groups as the server reports them: ascending runs.
    pub cards: Vec<Vec<u8>>,
}

/// Body of `POST /{gameId}/action`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub take_card: bool,
}

impl From<Action> for ActionRequest {
    fn from(action: Action) -> Self {
        Self {
            take_card: action.takes_card(),
        }
    }
}

impl TryFrom<StatusDto> for TableState {
    type Error = AppError;

    fn try_from(dto: StatusDto) -> Result<Self, Self::Error> {
        let mut players = Vec::with_capacity(dto.players.len());
        for p in dto.players {
            let hand = Hand::from_groups(p.cards)
                .map_err(|e| AppError::invalid_state(format!("malformed hand from server: {e}")))?;
            players.push(PlayerState {
                hand,
                money: p.money,
            });
        }
        Ok(TableState {
            card: dto.card,
            pot: dto.money,
            finished: dto.finished,
            players,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "gameId": "abc123",
        "status": {
            "card": 17,
            "money": 4,
            "finished": false,
            "players": [
                { "name": "bot", "money": 9, "cards": [[5, 6], [12]] },
                { "name": "opp1", "money": 11, "cards": [] },
                { "name": "opp2", "money": 10, "cards": [[30]] },
                { "money": 11, "cards": [] }
            ]
        }
    }"#;

    #[test]
    fn deserializes_and_converts_a_server_snapshot() {
        let created: GameCreated = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(created.game_id, "abc123");

        let state = TableState::try_from(created.status).unwrap();
        assert_eq!(state.card, 17);
        assert_eq!(state.pot, 4);
        assert!(!state.finished);
        assert_eq!(state.players.len(), 4);
        assert_eq!(state.acting_player().unwrap().money, 9);
        assert_eq!(
            state.acting_player().unwrap().hand.groups(),
            &[vec![5, 6], vec![12]]
        );
        assert_eq!(state.others_cards(), vec![30]);
    }

    #[test]
    fn rejects_a_snapshot_with_a_malformed_hand() {
        let dto = StatusDto {
            card: 17,
            money: 0,
            finished: false,
            players: vec![PlayerDto {
                name: None,
                money: 11,
                cards: vec![vec![5, 7]],
            }],
        };
        assert!(matches!(
            TableState::try_from(dto),
            Err(AppError::InvalidState { .. })
        ));
    }

    #[test]
    fn action_body_uses_the_wire_field_name() {
        let body = serde_json::to_string(&ActionRequest::from(Action::TakeCard)).unwrap();
        assert_eq!(body, r#"{"takeCard":true}"#);
        let body = serde_json::to_string(&ActionRequest::from(Action::PlaceCoin)).unwrap();
        assert_eq!(body, r#"{"takeCard":false}"#);
    }
}
