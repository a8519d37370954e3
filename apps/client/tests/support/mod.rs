#![allow(dead_code)]

pub mod fixtures;
pub mod recording_presenter;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use client::{ClientError, GameId, GameSession, SessionHandle};
use tokio::task::JoinHandle;

pub use fake_api::{Call, FakeApi};
pub use recording_presenter::{Event, RecordingPresenter};

/// Upper bound for any single wait in these tests.
pub const STEP_TIMEOUT: Duration = Duration::from_secs(5);

pub struct RunningSession {
    pub handle: SessionHandle,
    pub task: JoinHandle<Result<(), ClientError>>,
}

impl RunningSession {
    /// Tear down and wait for the loop to finish.
    pub async fn stop(self) -> Result<(), ClientError> {
        self.handle.teardown();
        within(self.task).await.expect("session task panicked")
    }

    /// Wait for the loop to end on its own.
    pub async fn finished(self) -> Result<(), ClientError> {
        within(self.task).await.expect("session task panicked")
    }
}

pub fn start(api: &Arc<FakeApi>, presenter: &Arc<RecordingPresenter>) -> RunningSession {
    let session = GameSession::new(
        &fixtures::config(),
        Arc::clone(api) as Arc<dyn client::GameApi>,
        Arc::clone(presenter) as Arc<dyn client::Presenter>,
        GameId::from("g-1"),
    );
    let handle = session.handle();
    let task = tokio::spawn(session.run());
    RunningSession { handle, task }
}

pub async fn within<F: Future>(fut: F) -> F::Output {
    tokio::time::timeout(STEP_TIMEOUT, fut)
        .await
        .expect("timed out waiting for the session")
}
