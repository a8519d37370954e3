use crate::domain::cards_types::CardType;
use crate::domain::ids::PlayerId;
use crate::domain::targeting::{eligible_targets, resolve_targets, TargetResolution};
use crate::protocol::game_state::{GameStateSnapshot, PlayerInfo, PlayerKind};

fn player(id: &str, alive: bool, protected: bool) -> PlayerInfo {
    PlayerInfo {
        id: PlayerId::from(id),
        name: id.to_uppercase(),
        kind: if id == "me" {
            PlayerKind::Human
        } else {
            PlayerKind::Cpu
        },
        alive,
        protected,
        rounds_won: 0,
        hand_card: None,
        discarded_cards: Vec::new(),
    }
}

fn table(players: Vec<PlayerInfo>) -> GameStateSnapshot {
    GameStateSnapshot {
        game_id: None,
        current_round: 1,
        current_player_id: Some(PlayerId::from("me")),
        current_player_name: None,
        players,
        deck_size: 10,
        recent_logs: Vec::new(),
        round_over: false,
        round_winner_id: None,
        round_winner_name: None,
        secret_card: None,
    }
}

fn ids(players: &[&PlayerInfo]) -> Vec<String> {
    players.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn opponents_must_be_alive_and_unprotected() {
    let snap = table(vec![
        player("me", true, false),
        player("a", true, false),
        player("b", false, false),
        player("c", true, true),
    ]);
    let me = PlayerId::from("me");
    for card in [
        CardType::Guard,
        CardType::Priest,
        CardType::Baron,
        CardType::King,
    ] {
        assert_eq!(ids(&eligible_targets(&snap, &me, card)), vec!["a"]);
    }
}

#[test]
fn prince_may_target_its_own_player() {
    let snap = table(vec![player("me", true, false), player("a", true, false)]);
    let me = PlayerId::from("me");
    assert_eq!(
        ids(&eligible_targets(&snap, &me, CardType::Prince)),
        vec!["me", "a"]
    );
}

#[test]
fn no_target_cards_have_no_eligible_players() {
    let snap = table(vec![player("me", true, false), player("a", true, false)]);
    let me = PlayerId::from("me");
    assert!(eligible_targets(&snap, &me, CardType::Handmaid).is_empty());
    assert!(eligible_targets(&snap, &me, CardType::Princess).is_empty());
}

#[test]
fn zero_eligible_targets_falls_back_per_card_type() {
    let snap = table(vec![
        player("me", true, true),
        player("a", true, true),
        player("b", false, false),
    ]);
    let me = PlayerId::from("me");
    assert_eq!(
        resolve_targets(&snap, &me, CardType::Guard),
        TargetResolution::NoEffect
    );
    assert_eq!(
        resolve_targets(&snap, &me, CardType::King),
        TargetResolution::NoEffect
    );
    assert_eq!(
        resolve_targets(&snap, &me, CardType::Prince),
        TargetResolution::AutoSelf
    );
}
