use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::ids::{GameId, PlayerId};
use crate::error::ClientError;

/// Authoritative view of one game as the server reports it to a viewer.
///
/// A new snapshot always replaces the previous one; nothing is merged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    #[serde(default)]
    pub game_id: Option<GameId>,
    #[serde(default)]
    pub current_round: u32,
    #[serde(default)]
    pub current_player_id: Option<PlayerId>,
    #[serde(default)]
    pub current_player_name: Option<String>,
    pub players: Vec<PlayerInfo>,
    #[serde(default)]
    pub deck_size: u32,
    #[serde(default)]
    pub recent_logs: Vec<String>,
    pub round_over: bool,
    #[serde(default)]
    pub round_winner_id: Option<PlayerId>,
    #[serde(default)]
    pub round_winner_name: Option<String>,
    #[serde(default)]
    pub secret_card: Option<Card>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerKind {
    #[default]
    Human,
    Cpu,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: PlayerKind,
    pub alive: bool,
    pub protected: bool,
    #[serde(default)]
    pub rounds_won: u32,
    /// Revealed only to its owner mid-turn, or to everyone at round end.
    #[serde(default)]
    pub hand_card: Option<Card>,
    #[serde(default)]
    pub discarded_cards: Vec<Card>,
}

impl GameStateSnapshot {
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerInfo> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Player whose turn it is. Fails fast when the id is unset or unknown.
    pub fn current_player(&self) -> Result<&PlayerInfo, ClientError> {
        let id = self
            .current_player_id
            .as_ref()
            .ok_or_else(|| ClientError::integrity("snapshot has no current player"))?;
        self.player(id)
            .ok_or_else(|| ClientError::missing("current player", id))
    }

    /// Winner of a finished round. Fails fast when the id is unset or unknown.
    pub fn round_winner(&self) -> Result<&PlayerInfo, ClientError> {
        let id = self
            .round_winner_id
            .as_ref()
            .ok_or_else(|| ClientError::integrity("finished round has no winner"))?;
        self.player(id)
            .ok_or_else(|| ClientError::missing("round winner", id))
    }

    pub fn is_current(&self, id: &PlayerId) -> bool {
        self.current_player_id.as_ref() == Some(id)
    }

    /// Checks the invariants every accepted snapshot must hold.
    ///
    /// While a round is running exactly one listed player carries the
    /// current-player id.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.round_over {
            return Ok(());
        }
        let id = self
            .current_player_id
            .as_ref()
            .ok_or_else(|| ClientError::integrity("running round has no current player"))?;
        match self.players.iter().filter(|p| &p.id == id).count() {
            0 => Err(ClientError::missing("current player", id)),
            1 => Ok(()),
            n => Err(ClientError::integrity(format!(
                "current player {id} is listed {n} times"
            ))),
        }
    }
}
