//! Loop-side side of a session: receives player intents and steers the
//! input gate.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use super::handle::SessionShared;
use super::input_gate::{InputPhase, TurnInput};
use crate::error::ClientError;
use crate::presenter::Presenter;

pub struct SessionContext {
    shared: Arc<SessionShared>,
    rx: mpsc::Receiver<TurnInput>,
}

impl SessionContext {
    pub(crate) fn new(shared: Arc<SessionShared>, rx: mpsc::Receiver<TurnInput>) -> Self {
        Self { shared, rx }
    }

    pub fn presenter(&self) -> &dyn Presenter {
        self.shared.presenter.as_ref()
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.shared.cancel
    }

    pub fn set_phase(&self, phase: InputPhase) {
        trace!(session_id = %self.shared.id, ?phase, "input phase");
        self.shared.gate.lock().set_phase(phase);
    }

    /// Show gestures over a hand of `hand_len` cards, `selected` highlighted.
    pub fn arm_hand(&self, hand_len: usize, selected: usize) {
        self.shared.gate.lock().arm(hand_len, selected);
    }

    pub fn reset_selection(&self) {
        self.shared.gate.lock().reset_selection();
    }

    /// Next player intent. Fails with `SessionClosed` once torn down.
    pub async fn next_input(&mut self) -> Result<TurnInput, ClientError> {
        tokio::select! {
            biased;
            _ = self.shared.cancel.cancelled() => Err(ClientError::SessionClosed),
            input = self.rx.recv() => input.ok_or(ClientError::SessionClosed),
        }
    }
}
