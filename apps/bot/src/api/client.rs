//! HTTP client for the game server.
//!
//! Transport failures are terminal for the session: the caller logs the
//! error and stops, there are no retries.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Response;

use super::dto::{ActionRequest, ActionResponse, GameCreated};
use crate::config::ApiConfig;
use crate::domain::Action;
use crate::error::AppError;

pub struct GameClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GameClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Start a new game session. The response carries the initial snapshot.
    pub async fn create_game(&self) -> Result<GameCreated, AppError> {
        let response = self
            .http
            .post(&self.base_url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Submit one action and receive the next snapshot.
    pub async fn post_action(
        &self,
        game_id: &str,
        action: Action,
    ) -> Result<ActionResponse, AppError> {
        let url = format!("{}/{}/action", self.base_url, game_id);
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .json(&ActionRequest::from(action))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        Err(AppError::api(status.as_u16(), detail))
    }
}
