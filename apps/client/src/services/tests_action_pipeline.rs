// Pipeline stage walk-throughs - no transport involved
use crate::domain::{Card, CardId, CardType, DiscardHistory, PlayerId};
use crate::errors::domain::DomainError;
use crate::protocol::{GameStateSnapshot, PlayerInfo, PlayerKind};
use crate::services::action_pipeline::{ActionPipeline, PipelineStage, Step};

fn card(id: &str, card_type: CardType) -> Card {
    Card::new(CardId::from(id), card_type)
}

fn seat(id: &str, alive: bool, protected: bool) -> PlayerInfo {
    PlayerInfo {
        id: PlayerId::from(id),
        name: id.to_string(),
        kind: if id == "me" { PlayerKind::Human } else { PlayerKind::Cpu },
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
        deck_size: 8,
        recent_logs: Vec::new(),
        round_over: false,
        round_winner_id: None,
        round_winner_name: None,
        secret_card: None,
    }
}

fn me() -> PlayerId {
    PlayerId::from("me")
}

fn drawn(cards: Vec<Card>) -> ActionPipeline {
    let mut pipeline = ActionPipeline::new();
    pipeline.on_draw(cards).unwrap();
    pipeline
}

#[test]
fn guard_walks_target_then_guess() {
    let mut pipeline = drawn(vec![card("g", CardType::Guard), card("h", CardType::Handmaid)]);
    let snapshot = table(vec![seat("me", true, false), seat("cpu-1", true, false)]);

    assert_eq!(pipeline.select_card(0).unwrap(), Step::NeedTargets);
    let Step::ChooseTarget(targets) = pipeline.offer_targets(&snapshot, &me()).unwrap() else {
        panic!("expected target choice");
    };
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].id.as_str(), "cpu-1");

    let Step::ChooseGuess(ranks) = pipeline.choose_target(&PlayerId::from("cpu-1")).unwrap() else {
        panic!("expected guess choice");
    };
    assert_eq!(ranks, vec![2, 3, 4, 5, 6, 7, 8]);

    let Step::Submit(action) = pipeline.choose_guess(3).unwrap() else {
        panic!("expected submit");
    };
    let request = action.to_request(&me());
    assert_eq!(request.card_id.as_str(), "g");
    assert_eq!(request.target_id, Some(PlayerId::from("cpu-1")));
    assert_eq!(request.guess_number, Some(3));
    assert_eq!(pipeline.stage(), &PipelineStage::Submitting);

    let mut discard = DiscardHistory::new();
    let played = pipeline.commit(&mut discard).unwrap();
    assert_eq!(played.card_type, CardType::Guard);
    assert_eq!(discard.len(), 1);
    assert_eq!(pipeline.stage(), &PipelineStage::Committed);
    assert!(pipeline.pending().is_none());
}

#[test]
fn no_target_card_submits_at_once() {
    let mut pipeline = drawn(vec![card("c", CardType::Countess), card("k", CardType::King)]);
    let Step::Submit(action) = pipeline.select_card(0).unwrap() else {
        panic!("expected submit");
    };
    assert!(action.target.is_none());
    assert!(action.guess.is_none());
}

#[test]
fn everyone_protected_submits_without_target() {
    let mut pipeline = drawn(vec![card("b", CardType::Baron), card("p", CardType::Princess)]);
    let snapshot = table(vec![
        seat("me", true, false),
        seat("cpu-1", true, true),
        seat("cpu-2", false, false),
    ]);
    pipeline.select_card(0).unwrap();
    let Step::Submit(action) = pipeline.offer_targets(&snapshot, &me()).unwrap() else {
        panic!("expected submit");
    };
    assert_eq!(action.to_request(&me()).target_id, None);
    assert_eq!(action.guess, None);
}

#[test]
fn prince_may_target_self_and_falls_back_to_self() {
    let mut pipeline = drawn(vec![card("pr", CardType::Prince), card("g", CardType::Guard)]);
    let open = table(vec![seat("me", true, false), seat("cpu-1", true, true)]);
    pipeline.select_card(0).unwrap();
    let Step::ChooseTarget(targets) = pipeline.offer_targets(&open, &me()).unwrap() else {
        panic!("expected target choice");
    };
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].id, me());

    pipeline.cancel().unwrap();
    let sealed = table(vec![seat("me", true, true), seat("cpu-1", true, true)]);
    pipeline.select_card(0).unwrap();
    let Step::Submit(action) = pipeline.offer_targets(&sealed, &me()).unwrap() else {
        panic!("expected submit");
    };
    assert_eq!(action.target, Some(me()));
}

#[test]
fn cancel_restores_drawn_and_forgets_the_action() {
    let mut pipeline = drawn(vec![card("g", CardType::Guard), card("k", CardType::King)]);
    let snapshot = table(vec![seat("me", true, false), seat("cpu-1", true, false)]);
    pipeline.select_card(0).unwrap();
    pipeline.offer_targets(&snapshot, &me()).unwrap();
    pipeline.choose_target(&PlayerId::from("cpu-1")).unwrap();

    pipeline.cancel().unwrap();
    assert_eq!(pipeline.stage(), &PipelineStage::Drawn);
    assert!(pipeline.pending().is_none());
    assert_eq!(pipeline.hand().len(), 2);
}

#[test]
fn out_of_set_choices_leave_state_unchanged() {
    let mut pipeline = drawn(vec![card("g", CardType::Guard), card("k", CardType::King)]);
    let snapshot = table(vec![seat("me", true, false), seat("cpu-1", true, false)]);
    pipeline.select_card(0).unwrap();
    pipeline.offer_targets(&snapshot, &me()).unwrap();

    let err = pipeline.choose_target(&PlayerId::from("me")).unwrap_err();
    assert_eq!(err, DomainError::TargetNotEligible(me()));
    assert!(matches!(pipeline.stage(), PipelineStage::TargetSelection { .. }));

    pipeline.choose_target(&PlayerId::from("cpu-1")).unwrap();
    assert_eq!(pipeline.choose_guess(1).unwrap_err(), DomainError::GuessOutOfRange(1));
    assert_eq!(pipeline.choose_guess(9).unwrap_err(), DomainError::GuessOutOfRange(9));
    assert_eq!(pipeline.stage(), &PipelineStage::GuessSelection);
}

#[test]
fn failed_submission_reverts_without_committing() {
    let mut pipeline = drawn(vec![card("h", CardType::Handmaid), card("k", CardType::King)]);
    pipeline.select_card(0).unwrap();
    pipeline.revert().unwrap();
    assert_eq!(pipeline.stage(), &PipelineStage::Drawn);
    assert!(pipeline.pending().is_none());

    let mut discard = DiscardHistory::new();
    assert!(pipeline.commit(&mut discard).is_err());
    assert!(discard.is_empty());
}

#[test]
fn switching_wraps_both_ways() {
    let mut pipeline = drawn(vec![card("a", CardType::Guard), card("b", CardType::Priest)]);
    assert_eq!(pipeline.switch(1).unwrap(), 1);
    assert_eq!(pipeline.switch(1).unwrap(), 0);
    assert_eq!(pipeline.switch(-1).unwrap(), 1);
}

#[test]
fn stage_guards_reject_out_of_order_calls() {
    let mut pipeline = ActionPipeline::new();
    assert!(matches!(
        pipeline.select_card(0),
        Err(DomainError::PhaseMismatch { expected: "Drawn", actual: "Idle" })
    ));
    assert_eq!(pipeline.on_draw(Vec::new()), Err(DomainError::EmptyHand));

    let mut pipeline = drawn(vec![card("a", CardType::Guard)]);
    assert_eq!(pipeline.select_card(3), Err(DomainError::NoCardAtIndex(3)));
    assert!(pipeline.on_draw(vec![card("b", CardType::King)]).is_err());
    assert!(pipeline.cancel().is_err());
}
