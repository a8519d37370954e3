//! Snapshot and card builders shaped like the game server's answers.

use client::domain::CardId;
use client::protocol::PlayerKind;
use client::{
    Card, CardType, ClientConfig, ClientError, CpuIntent, DrawOutcome, GameId, GameStateSnapshot,
    PlayerId, PlayerInfo,
};

pub const ME: &str = "me";

pub fn config() -> ClientConfig {
    let mut config = ClientConfig::for_tests();
    config.player_id = PlayerId::from(ME);
    config
}

pub fn card(id: &str, card_type: CardType) -> Card {
    Card::new(CardId::from(id), card_type)
}

pub fn human(id: &str) -> PlayerInfo {
    seat(id, PlayerKind::Human)
}

pub fn cpu(id: &str) -> PlayerInfo {
    seat(id, PlayerKind::Cpu)
}

fn seat(id: &str, kind: PlayerKind) -> PlayerInfo {
    PlayerInfo {
        id: PlayerId::from(id),
        name: id.to_uppercase(),
        kind,
        alive: true,
        protected: false,
        rounds_won: 0,
        hand_card: None,
        discarded_cards: Vec::new(),
    }
}

pub fn protected(mut player: PlayerInfo) -> PlayerInfo {
    player.protected = true;
    player
}

/// Me plus two CPU seats.
pub fn seats() -> Vec<PlayerInfo> {
    vec![human(ME), cpu("cpu-1"), cpu("cpu-2")]
}

pub fn running(round: u32, current: &str, players: Vec<PlayerInfo>) -> GameStateSnapshot {
    GameStateSnapshot {
        game_id: Some(GameId::from("g-1")),
        current_round: round,
        current_player_id: Some(PlayerId::from(current)),
        current_player_name: Some(current.to_uppercase()),
        players,
        deck_size: 10,
        recent_logs: Vec::new(),
        round_over: false,
        round_winner_id: None,
        round_winner_name: None,
        secret_card: None,
    }
}

pub fn finished(round: u32, winner: &str, mut players: Vec<PlayerInfo>) -> GameStateSnapshot {
    for (i, p) in players.iter_mut().enumerate() {
        p.hand_card = Some(card(&format!("final-{i}"), CardType::Baron));
    }
    GameStateSnapshot {
        game_id: Some(GameId::from("g-1")),
        current_round: round,
        current_player_id: None,
        current_player_name: None,
        players,
        deck_size: 0,
        recent_logs: Vec::new(),
        round_over: true,
        round_winner_id: Some(PlayerId::from(winner)),
        round_winner_name: Some(winner.to_uppercase()),
        secret_card: Some(card("secret", CardType::Guard)),
    }
}

pub fn drawn(cards: Vec<Card>) -> DrawOutcome {
    DrawOutcome {
        drawn_card: cards[0].clone(),
        playable_cards: cards,
        game_state: None,
    }
}

pub fn intent(card: Card, target: Option<&str>, guess: Option<u8>) -> CpuIntent {
    CpuIntent {
        card_to_play: card,
        target_id: target.map(PlayerId::from),
        guess_number: guess,
        reasoning: Some("only sensible move".to_string()),
    }
}

pub fn offline(op: &'static str) -> ClientError {
    ClientError::network(op, "connection refused")
}
