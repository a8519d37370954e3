//! Presentation collaborator: everything the loop shows the player.
//!
//! Implementations must be cheap and non-blocking; they are called from the
//! session task between awaits.

use tracing::{debug, error, info, warn};

use crate::domain::{Card, DiscardHistory, GameId};
use crate::error::ClientError;
use crate::protocol::{GameStateSnapshot, PlayerInfo};
use crate::services::state_sync::LocalView;

/// Narrative beats shown between authoritative renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Narration {
    Loading,
    GameStarted { game_id: GameId },
    TurnStarted { player_name: String, is_local: bool },
    CardDrawn { player_name: String },
    CpuThinking { player_name: String },
    CpuReasoning { player_name: String, reasoning: String },
    CardPlayed {
        player_name: String,
        card: Card,
        target_name: Option<String>,
        guess: Option<u8>,
    },
    PlayerEliminated { player_name: String },
    PlayerProtected { player_name: String },
    RoundEnded { winner_name: String },
    RoundStarted { round: u32 },
}

/// One seat's final state at round end.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalHand {
    pub player_name: String,
    pub card: Option<Card>,
    pub rounds_won: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub round: u32,
    pub winner: PlayerInfo,
    pub final_hands: Vec<FinalHand>,
    pub secret_card: Option<Card>,
}

impl RoundSummary {
    /// Fails when the winner id is absent from the player list.
    pub fn from_snapshot(snapshot: &GameStateSnapshot) -> Result<Self, ClientError> {
        let winner = snapshot.round_winner()?.clone();
        let final_hands = snapshot
            .players
            .iter()
            .map(|p| FinalHand {
                player_name: p.name.clone(),
                card: p.hand_card.clone(),
                rounds_won: p.rounds_won,
            })
            .collect();
        Ok(Self {
            round: snapshot.current_round,
            winner,
            final_hands,
            secret_card: snapshot.secret_card.clone(),
        })
    }
}

pub trait Presenter: Send + Sync {
    /// Full redraw from an accepted snapshot.
    fn render(&self, snapshot: &GameStateSnapshot, view: &LocalView);

    fn narrate(&self, narration: &Narration);

    /// The local player's playable cards with the selection highlighted.
    fn show_hand(&self, cards: &[Card], selected: usize);

    /// Visual lift of the selected card during an upward drag.
    fn lift_card(&self, lift: f32);

    fn reset_lift(&self);

    fn prompt_targets(&self, targets: &[PlayerInfo]);

    fn prompt_guess(&self, ranks: &[u8]);

    fn dismiss_prompts(&self);

    fn show_discards(&self, history: &DiscardHistory);

    fn show_round_over(&self, summary: &RoundSummary);

    /// A recoverable failure; the session keeps running.
    fn report_error(&self, err: &ClientError);

    /// The session cannot continue; leave the table for the top-level menu.
    fn exit_to_menu(&self, err: &ClientError);
}

/// Renders every presenter call as a log event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn render(&self, snapshot: &GameStateSnapshot, view: &LocalView) {
        info!(
            round = snapshot.current_round,
            current = snapshot.current_player_name.as_deref().unwrap_or("-"),
            deck = snapshot.deck_size,
            my_turn = view.is_my_turn,
            "table"
        );
        for player in &snapshot.players {
            info!(
                id = %player.id,
                name = %player.name,
                alive = player.alive,
                protected = player.protected,
                rounds_won = player.rounds_won,
                "seat"
            );
        }
        if let Some(card) = view.visible_hand.as_ref() {
            info!(card = %card.name, rank = card.rank(), "holding");
        }
        for line in &snapshot.recent_logs {
            debug!(line = %line, "log");
        }
    }

    fn narrate(&self, narration: &Narration) {
        match narration {
            Narration::Loading => info!("loading game"),
            Narration::GameStarted { game_id } => info!(game_id = %game_id, "game started"),
            Narration::TurnStarted { player_name, is_local } => {
                info!(player = %player_name, is_local, "turn started")
            }
            Narration::CardDrawn { player_name } => info!(player = %player_name, "drew a card"),
            Narration::CpuThinking { player_name } => info!(player = %player_name, "thinking"),
            Narration::CpuReasoning { player_name, reasoning } => {
                debug!(player = %player_name, reasoning = %reasoning, "cpu reasoning")
            }
            Narration::CardPlayed { player_name, card, target_name, guess } => info!(
                player = %player_name,
                card = %card.name,
                target = target_name.as_deref().unwrap_or("-"),
                guess = ?guess,
                "card played"
            ),
            Narration::PlayerEliminated { player_name } => {
                info!(player = %player_name, "eliminated")
            }
            Narration::PlayerProtected { player_name } => {
                info!(player = %player_name, "protected")
            }
            Narration::RoundEnded { winner_name } => info!(winner = %winner_name, "round ended"),
            Narration::RoundStarted { round } => info!(round, "round started"),
        }
    }

    fn show_hand(&self, cards: &[Card], selected: usize) {
        for (i, card) in cards.iter().enumerate() {
            let is_selected = i == selected;
            info!(index = i, card = %card.name, rank = card.rank(), selected = is_selected, "hand");
        }
    }

    fn lift_card(&self, lift: f32) {
        debug!(lift, "lift");
    }

    fn reset_lift(&self) {
        debug!("lift reset");
    }

    fn prompt_targets(&self, targets: &[PlayerInfo]) {
        let names: Vec<&str> = targets.iter().map(|p| p.id.as_str()).collect();
        info!(targets = ?names, "choose a target");
    }

    fn prompt_guess(&self, ranks: &[u8]) {
        info!(ranks = ?ranks, "guess a rank");
    }

    fn dismiss_prompts(&self) {
        debug!("prompts dismissed");
    }

    fn show_discards(&self, history: &DiscardHistory) {
        match history.last() {
            Some(card) => info!(top = %card.name, count = history.len(), "discard pile"),
            None => info!("discard pile cleared"),
        }
    }

    fn show_round_over(&self, summary: &RoundSummary) {
        info!(round = summary.round, winner = %summary.winner.name, "round over");
        for hand in &summary.final_hands {
            info!(
                player = %hand.player_name,
                card = hand.card.as_ref().map(|c| c.name.as_str()).unwrap_or("-"),
                rounds_won = hand.rounds_won,
                "final hand"
            );
        }
        if let Some(card) = summary.secret_card.as_ref() {
            info!(card = %card.name, "secret card");
        }
    }

    fn report_error(&self, err: &ClientError) {
        warn!(code = %err.code(), error = %err, "action failed");
    }

    fn exit_to_menu(&self, err: &ClientError) {
        error!(code = %err.code(), error = %err, "leaving the table");
    }
}
