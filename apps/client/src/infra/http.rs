//! reqwest-backed [`GameApi`] speaking the game server's REST routes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::api::GameApi;
use crate::domain::ids::{GameId, PlayerId};
use crate::error::ClientError;
use crate::protocol::{CardPlayRequest, CpuIntent, DrawOutcome, GameStateSnapshot};

/// Characters of an error body kept in a rejection message.
const MAX_ERROR_BODY: usize = 256;

#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: Client,
    base_url: String,
}

impl HttpGameApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::config(format!("http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn game_url(&self, game_id: &GameId, tail: &str) -> String {
        format!("{}/game/{}/{}", self.base_url, game_id, tail)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::network(op, "request timed out")
            } else {
                ClientError::network(op, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(ClientError::rejected(op, status.as_u16(), body));
        }

        debug!(op, status = status.as_u16(), "game server responded");
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::decode(op, e.to_string()))
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn fetch_state(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<GameStateSnapshot, ClientError> {
        let req = self
            .client
            .get(self.game_url(game_id, "state"))
            .query(&[("playerId", player_id.as_str())]);
        self.send("fetch state", req).await
    }

    async fn draw(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<DrawOutcome, ClientError> {
        let req = self
            .client
            .post(self.game_url(game_id, "draw"))
            .query(&[("playerId", player_id.as_str())]);
        self.send("draw", req).await
    }

    async fn play(
        &self,
        game_id: &GameId,
        request: &CardPlayRequest,
    ) -> Result<GameStateSnapshot, ClientError> {
        let req = self.client.post(self.game_url(game_id, "play")).json(request);
        self.send("play", req).await
    }

    async fn cpu_intent(
        &self,
        game_id: &GameId,
        cpu_player_id: &PlayerId,
    ) -> Result<CpuIntent, ClientError> {
        let req = self
            .client
            .get(self.game_url(game_id, "cpu-turn"))
            .query(&[("cpuPlayerId", cpu_player_id.as_str())]);
        self.send("cpu intent", req).await
    }

    async fn execute_cpu_intent(
        &self,
        game_id: &GameId,
        intent: &CpuIntent,
    ) -> Result<GameStateSnapshot, ClientError> {
        let req = self
            .client
            .post(self.game_url(game_id, "cpu-turn"))
            .json(intent);
        self.send("cpu execute", req).await
    }

    async fn advance_round(&self, game_id: &GameId) -> Result<GameStateSnapshot, ClientError> {
        let req = self.client.post(self.game_url(game_id, "next-round"));
        self.send("next round", req).await
    }

    async fn start_game(&self, cpu_count: u8) -> Result<GameStateSnapshot, ClientError> {
        let req = self
            .client
            .post(format!("{}/game/start", self.base_url))
            .query(&[("cpuCount", cpu_count)]);
        self.send("start game", req).await
    }
}
