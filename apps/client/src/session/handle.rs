//! UI-facing side of a session.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::input_gate::{InputGate, InputPhase, Release, TurnInput};
use crate::domain::PlayerId;
use crate::input::Point;
use crate::presenter::Presenter;

/// State shared by the handle and the session loop.
pub(crate) struct SessionShared {
    pub(crate) id: Uuid,
    pub(crate) gate: Mutex<InputGate>,
    pub(crate) tx: mpsc::Sender<TurnInput>,
    pub(crate) presenter: Arc<dyn Presenter>,
    pub(crate) cancel: CancellationToken,
}

impl SessionShared {
    /// Non-blocking handoff. The caller holds the gate lock.
    fn hand_off(&self, input: TurnInput) -> bool {
        match self.tx.try_send(input) {
            Ok(()) => true,
            Err(TrySendError::Full(input)) => {
                debug!(session_id = %self.id, ?input, "input channel full, dropping");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}

/// Cheap to clone; every clone drives the same session.
///
/// Each input method returns whether the input was accepted. Inputs that do
/// not fit the current phase are ignored at the point of origin.
#[derive(Clone)]
pub struct SessionHandle {
    shared: Arc<SessionShared>,
}

impl SessionHandle {
    pub(crate) fn new(shared: Arc<SessionShared>) -> Self {
        Self { shared }
    }

    pub fn session_id(&self) -> Uuid {
        self.shared.id
    }

    pub fn phase(&self) -> InputPhase {
        self.shared.gate.lock().phase()
    }

    pub fn is_closed(&self) -> bool {
        self.phase() == InputPhase::Closed
    }

    /// Touch-start. Overwrites any gesture still open.
    pub fn pointer_down(&self, at: Point) -> bool {
        self.shared.gate.lock().begin(at)
    }

    pub fn pointer_move(&self, at: Point) -> bool {
        let lift = self.shared.gate.lock().update(at);
        match lift {
            Some(lift) => {
                self.shared.presenter.lift_card(lift);
                true
            }
            None => false,
        }
    }

    /// Touch-end: classifies the gesture and, for a switch or a play, hands
    /// it to the loop.
    pub fn pointer_up(&self) -> bool {
        let release = {
            let mut gate = self.shared.gate.lock();
            gate.release(|input| self.shared.hand_off(input))
        };
        match release {
            Release::Send(_) => true,
            Release::Cancelled => {
                self.shared.presenter.reset_lift();
                true
            }
            Release::Ignored => false,
        }
    }

    pub fn select_target(&self, target: PlayerId) -> bool {
        self.offer(InputPhase::AwaitingTarget, TurnInput::SelectTarget(target))
    }

    pub fn select_guess(&self, guess: u8) -> bool {
        self.offer(InputPhase::AwaitingGuess, TurnInput::SelectGuess(guess))
    }

    /// Abort target or guess selection.
    pub fn cancel_selection(&self) -> bool {
        let mut gate = self.shared.gate.lock();
        let phase = gate.phase();
        if !matches!(phase, InputPhase::AwaitingTarget | InputPhase::AwaitingGuess) {
            return false;
        }
        gate.offer(phase, TurnInput::CancelSelection, |input| {
            self.shared.hand_off(input)
        })
    }

    pub fn retry_draw(&self) -> bool {
        self.offer(InputPhase::AwaitingRetry, TurnInput::RetryDraw)
    }

    pub fn next_round(&self) -> bool {
        self.offer(InputPhase::RoundOver, TurnInput::NextRound)
    }

    /// Stop the session. Safe to call any number of times.
    pub fn teardown(&self) {
        let (first, gesture_dropped) = {
            let mut gate = self.shared.gate.lock();
            let first = gate.phase() != InputPhase::Closed;
            let open = gate.gesture_open();
            gate.close();
            (first, open)
        };
        self.shared.cancel.cancel();
        if first {
            info!(session_id = %self.shared.id, gesture_dropped, "session torn down");
        }
    }

    fn offer(&self, phase: InputPhase, input: TurnInput) -> bool {
        self.shared
            .gate
            .lock()
            .offer(phase, input, |input| self.shared.hand_off(input))
    }
}
