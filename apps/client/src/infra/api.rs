//! The game server as the client sees it: six authoritative calls plus game
//! creation. Everything behind this trait is trusted as-is.

use async_trait::async_trait;

use crate::domain::ids::{GameId, PlayerId};
use crate::error::ClientError;
use crate::protocol::{CardPlayRequest, CpuIntent, DrawOutcome, GameStateSnapshot};

#[async_trait]
pub trait GameApi: Send + Sync {
    /// Current snapshot as seen by `player_id`.
    async fn fetch_state(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<GameStateSnapshot, ClientError>;

    /// Draw for the local player, returning the two cards it may play.
    async fn draw(&self, game_id: &GameId, player_id: &PlayerId)
        -> Result<DrawOutcome, ClientError>;

    async fn play(
        &self,
        game_id: &GameId,
        request: &CardPlayRequest,
    ) -> Result<GameStateSnapshot, ClientError>;

    /// Ask the server what a CPU seat will do. The server draws for it.
    async fn cpu_intent(
        &self,
        game_id: &GameId,
        cpu_player_id: &PlayerId,
    ) -> Result<CpuIntent, ClientError>;

    async fn execute_cpu_intent(
        &self,
        game_id: &GameId,
        intent: &CpuIntent,
    ) -> Result<GameStateSnapshot, ClientError>;

    async fn advance_round(&self, game_id: &GameId) -> Result<GameStateSnapshot, ClientError>;

    async fn start_game(&self, cpu_count: u8) -> Result<GameStateSnapshot, ClientError>;
}
