//! Presenter that keeps every call for later assertions.

use client::domain::{CardId, DiscardHistory};
use client::presenter::RoundSummary;
use client::{
    Card, CardType, ClientError, ErrorCode, GameStateSnapshot, LocalView, Narration, PlayerId,
    PlayerInfo, Presenter,
};
use parking_lot::Mutex;
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Render {
        current: Option<PlayerId>,
        round_over: bool,
        is_my_turn: bool,
    },
    Narrate(Narration),
    Hand {
        cards: Vec<CardType>,
        selected: usize,
    },
    Lift(f32),
    ResetLift,
    PromptTargets(Vec<PlayerId>),
    PromptGuess(Vec<u8>),
    DismissPrompts,
    Discards(Vec<CardId>),
    RoundOver {
        winner: PlayerId,
        revealed: usize,
    },
    Error(ErrorCode),
    ExitToMenu(ErrorCode),
}

#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<Event>>,
    changed: Notify,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.lock().iter().filter(|e| pred(e)).count()
    }

    /// Resolve once `n` events match `pred`, returning the last of them.
    pub async fn wait_for_nth(&self, n: usize, pred: impl Fn(&Event) -> bool) -> Event {
        loop {
            let changed = self.changed.notified();
            if let Some(event) = self
                .events
                .lock()
                .iter()
                .filter(|e| pred(e))
                .nth(n.saturating_sub(1))
                .cloned()
            {
                return event;
            }
            changed.await;
        }
    }

    pub async fn wait_for(&self, pred: impl Fn(&Event) -> bool) -> Event {
        self.wait_for_nth(1, pred).await
    }

    fn push(&self, event: Event) {
        self.events.lock().push(event);
        self.changed.notify_waiters();
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, snapshot: &GameStateSnapshot, view: &LocalView) {
        self.push(Event::Render {
            current: snapshot.current_player_id.clone(),
            round_over: snapshot.round_over,
            is_my_turn: view.is_my_turn,
        });
    }

    fn narrate(&self, narration: &Narration) {
        self.push(Event::Narrate(narration.clone()));
    }

    fn show_hand(&self, cards: &[Card], selected: usize) {
        self.push(Event::Hand {
            cards: cards.iter().map(|c| c.card_type).collect(),
            selected,
        });
    }

    fn lift_card(&self, lift: f32) {
        self.push(Event::Lift(lift));
    }

    fn reset_lift(&self) {
        self.push(Event::ResetLift);
    }

    fn prompt_targets(&self, targets: &[PlayerInfo]) {
        self.push(Event::PromptTargets(
            targets.iter().map(|p| p.id.clone()).collect(),
        ));
    }

    fn prompt_guess(&self, ranks: &[u8]) {
        self.push(Event::PromptGuess(ranks.to_vec()));
    }

    fn dismiss_prompts(&self) {
        self.push(Event::DismissPrompts);
    }

    fn show_discards(&self, history: &DiscardHistory) {
        self.push(Event::Discards(
            history.as_slice().iter().map(|c| c.id.clone()).collect(),
        ));
    }

    fn show_round_over(&self, summary: &RoundSummary) {
        self.push(Event::RoundOver {
            winner: summary.winner.id.clone(),
            revealed: summary.final_hands.iter().filter(|h| h.card.is_some()).count(),
        });
    }

    fn report_error(&self, err: &ClientError) {
        self.push(Event::Error(err.code()));
    }

    fn exit_to_menu(&self, err: &ClientError) {
        self.push(Event::ExitToMenu(err.code()));
    }
}
