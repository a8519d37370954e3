use serde::{Deserialize, Serialize};

use super::game_state::GameStateSnapshot;
use crate::domain::cards_types::Card;
use crate::domain::ids::{CardId, PlayerId};

/// Body of `POST /game/{id}/play`. Absent target and guess travel as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPlayRequest {
    pub player_id: PlayerId,
    pub card_id: CardId,
    pub target_id: Option<PlayerId>,
    pub guess_number: Option<u8>,
}

/// Result of `POST /game/{id}/draw`.
///
/// `playable_cards` lists the drawn card first, then the card already held.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawOutcome {
    pub drawn_card: Card,
    pub playable_cards: Vec<Card>,
    #[serde(default)]
    pub game_state: Option<GameStateSnapshot>,
}

/// The server's decision for a CPU seat. Executed back verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuIntent {
    pub card_to_play: Card,
    #[serde(default)]
    pub target_id: Option<PlayerId>,
    #[serde(default)]
    pub guess_number: Option<u8>,
    #[serde(default)]
    pub reasoning: Option<String>,
}
