//! What the session accepts from the player right now.

use crate::domain::PlayerId;
use crate::input::{GestureOutcome, GestureRecognizer, Point};

/// Which inputs the gate lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPhase {
    /// Nothing is being asked of the player.
    #[default]
    Idle,
    /// The local player's hand is up; pointer gestures are live.
    AwaitingGesture,
    AwaitingTarget,
    AwaitingGuess,
    /// The draw failed; only a retry-draw is accepted.
    AwaitingRetry,
    /// A request is in flight or the loop has not picked the input up yet.
    Busy,
    /// A round summary is up; only next-round is accepted.
    RoundOver,
    /// Torn down. Terminal.
    Closed,
}

/// Intents travelling from the UI to the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    SwitchCard { direction: i8 },
    PlayCard { index: usize },
    SelectTarget(PlayerId),
    SelectGuess(u8),
    CancelSelection,
    RetryDraw,
    NextRound,
}

/// Result of feeding a touch-end to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Release {
    Ignored,
    Cancelled,
    Send(TurnInput),
}

/// Per-session interaction state behind one lock: the phase, the open
/// gesture session and the displayed card index.
#[derive(Debug, Default)]
pub struct InputGate {
    phase: InputPhase,
    recognizer: GestureRecognizer,
    selected: usize,
    hand_len: usize,
}

impl InputGate {
    pub fn phase(&self) -> InputPhase {
        self.phase
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn gesture_open(&self) -> bool {
        self.recognizer.is_open()
    }

    /// Move to `phase` unless the gate is closed. Leaving the gesture phase
    /// drops any open gesture.
    pub(crate) fn set_phase(&mut self, phase: InputPhase) {
        if self.phase == InputPhase::Closed {
            return;
        }
        if phase != InputPhase::AwaitingGesture {
            self.recognizer.discard();
        }
        self.phase = phase;
    }

    /// Open the gesture phase over a hand of `hand_len` cards.
    pub(crate) fn arm(&mut self, hand_len: usize, selected: usize) {
        self.hand_len = hand_len;
        self.selected = selected;
        self.recognizer.discard();
        self.set_phase(InputPhase::AwaitingGesture);
    }

    pub(crate) fn reset_selection(&mut self) {
        self.selected = 0;
        self.hand_len = 0;
    }

    pub(crate) fn close(&mut self) {
        self.recognizer.discard();
        self.phase = InputPhase::Closed;
    }

    pub(crate) fn begin(&mut self, at: Point) -> bool {
        if self.phase != InputPhase::AwaitingGesture {
            return false;
        }
        self.recognizer.begin(at);
        true
    }

    pub(crate) fn update(&mut self, at: Point) -> Option<f32> {
        if self.phase != InputPhase::AwaitingGesture {
            return None;
        }
        self.recognizer.update(at)
    }

    /// Classify the release. A play input flips the gate to busy only when
    /// `commit` reports the input was handed to the loop.
    pub(crate) fn release(&mut self, commit: impl FnOnce(TurnInput) -> bool) -> Release {
        if self.phase != InputPhase::AwaitingGesture {
            return Release::Ignored;
        }
        let Some(outcome) = self.recognizer.finish(self.selected) else {
            return Release::Ignored;
        };
        match outcome {
            GestureOutcome::Cancel => Release::Cancelled,
            GestureOutcome::SwitchCard { direction } => {
                let input = TurnInput::SwitchCard { direction };
                if !commit(input.clone()) {
                    return Release::Ignored;
                }
                if self.hand_len > 0 {
                    let len = self.hand_len as isize;
                    self.selected =
                        (self.selected as isize + direction as isize).rem_euclid(len) as usize;
                }
                Release::Send(input)
            }
            GestureOutcome::PlayCard { index } => {
                let input = TurnInput::PlayCard { index };
                if !commit(input.clone()) {
                    return Release::Ignored;
                }
                self.phase = InputPhase::Busy;
                Release::Send(input)
            }
        }
    }

    /// Hand a selection-style input to the loop if the gate is in `phase`.
    pub(crate) fn offer(
        &mut self,
        phase: InputPhase,
        input: TurnInput,
        commit: impl FnOnce(TurnInput) -> bool,
    ) -> bool {
        if self.phase != phase || !commit(input) {
            return false;
        }
        self.phase = InputPhase::Busy;
        true
    }
}
