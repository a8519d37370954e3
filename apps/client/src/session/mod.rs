//! Per-session context: one game table, its input gate and its loop.
//!
//! Nothing here is process-wide; any number of sessions may run side by
//! side, each on its own task.

pub mod context;
pub mod handle;
pub mod input_gate;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub use context::SessionContext;
pub use handle::SessionHandle;
use handle::SessionShared;
pub use input_gate::{InputGate, InputPhase, TurnInput};

use crate::config::ClientConfig;
use crate::domain::GameId;
use crate::error::ClientError;
use crate::infra::GameApi;
use crate::presenter::Presenter;
use crate::services::state_sync::StateSync;
use crate::services::turn_cycle::TurnCycle;

pub struct GameSession {
    id: Uuid,
    game_id: GameId,
    handle: SessionHandle,
    cycle: TurnCycle,
}

impl GameSession {
    pub fn new(
        config: &ClientConfig,
        api: Arc<dyn GameApi>,
        presenter: Arc<dyn Presenter>,
        game_id: GameId,
    ) -> Self {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::channel(config.input_capacity.max(1));
        let shared = Arc::new(SessionShared {
            id,
            gate: Mutex::new(InputGate::default()),
            tx,
            presenter,
            cancel: CancellationToken::new(),
        });

        let sync = StateSync::new(api, game_id.clone(), config.player_id.clone(), config.retry);
        let ctx = SessionContext::new(Arc::clone(&shared), rx);
        let cycle = TurnCycle::new(sync, config.pacing, ctx);

        Self {
            id,
            game_id,
            handle: SessionHandle::new(shared),
            cycle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Drive the table until teardown (`Ok`) or a fatal failure (`Err`).
    ///
    /// A fatal failure is shown through `Presenter::exit_to_menu` and closes
    /// the session.
    pub async fn run(self) -> Result<(), ClientError> {
        let Self {
            id,
            game_id,
            handle,
            mut cycle,
        } = self;
        let span = info_span!("session", session_id = %id, game_id = %game_id);
        let cancel = cycle.context().cancel_token().clone();

        let outcome = async {
            info!("session started");
            tokio::select! {
                biased;
                _ = cancel.cancelled() => Ok(()),
                res = cycle.run() => res,
            }
        }
        .instrument(span)
        .await;

        match outcome {
            Ok(()) | Err(ClientError::SessionClosed) => Ok(()),
            Err(e) => {
                cycle.context().presenter().exit_to_menu(&e);
                handle.teardown();
                Err(e)
            }
        }
    }
}
