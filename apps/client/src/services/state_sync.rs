//! Sole owner of the authoritative snapshot and of [`LocalView`].
//!
//! Every server answer that carries a snapshot goes through
//! [`StateSync::accept`], which validates it, diffs it against the previous
//! one and replaces it whole.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{derive_transitions, Card, GameId, PlayerId, SnapshotTransition};
use crate::error::ClientError;
use crate::infra::{retry_idempotent, GameApi, RetryPolicy};
use crate::protocol::{CardPlayRequest, CpuIntent, DrawOutcome, GameStateSnapshot};

/// Flags derived from the current snapshot for the local player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalView {
    pub is_my_turn: bool,
    /// The local player's revealed card, when the server shows it.
    pub visible_hand: Option<Card>,
}

impl LocalView {
    pub fn derive(snapshot: &GameStateSnapshot, local_id: &PlayerId) -> Self {
        Self {
            is_my_turn: !snapshot.round_over && snapshot.is_current(local_id),
            visible_hand: snapshot
                .player(local_id)
                .and_then(|p| p.hand_card.clone()),
        }
    }
}

/// An accepted snapshot and what changed to get there.
#[derive(Debug, Clone)]
pub struct SyncUpdate {
    pub snapshot: Arc<GameStateSnapshot>,
    pub transitions: Vec<SnapshotTransition>,
}

pub struct StateSync {
    api: Arc<dyn GameApi>,
    game_id: GameId,
    local_id: PlayerId,
    retry: RetryPolicy,
    current: Option<Arc<GameStateSnapshot>>,
    view: LocalView,
}

impl StateSync {
    pub fn new(
        api: Arc<dyn GameApi>,
        game_id: GameId,
        local_id: PlayerId,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            api,
            game_id,
            local_id,
            retry,
            current: None,
            view: LocalView::default(),
        }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn local_id(&self) -> &PlayerId {
        &self.local_id
    }

    /// Last accepted snapshot, shared whole.
    pub fn current(&self) -> Option<Arc<GameStateSnapshot>> {
        self.current.clone()
    }

    pub fn view(&self) -> &LocalView {
        &self.view
    }

    /// Fetch a fresh snapshot. Transport failures are retried per policy.
    pub async fn poll(&mut self) -> Result<SyncUpdate, ClientError> {
        let api = Arc::clone(&self.api);
        let (game_id, local_id) = (&self.game_id, &self.local_id);
        let snapshot = retry_idempotent(self.retry, "fetch state", || {
            api.fetch_state(game_id, local_id)
        })
        .await?;
        self.accept(snapshot)
    }

    /// Validate and install `snapshot`, replacing the previous one.
    ///
    /// A rejected snapshot leaves the current one untouched.
    pub fn accept(&mut self, snapshot: GameStateSnapshot) -> Result<SyncUpdate, ClientError> {
        snapshot.validate()?;
        let transitions = derive_transitions(self.current.as_deref(), &snapshot);
        let snapshot = Arc::new(snapshot);

        self.view = LocalView::derive(&snapshot, &self.local_id);
        self.current = Some(Arc::clone(&snapshot));

        debug!(
            game_id = %self.game_id,
            round = snapshot.current_round,
            round_over = snapshot.round_over,
            transitions = transitions.len(),
            "snapshot accepted"
        );
        Ok(SyncUpdate {
            snapshot,
            transitions,
        })
    }

    /// Draw for the local player. A snapshot bundled with the draw is
    /// accepted before returning.
    pub async fn draw(&mut self) -> Result<DrawOutcome, ClientError> {
        let mut outcome = self.api.draw(&self.game_id, &self.local_id).await?;
        if let Some(snapshot) = outcome.game_state.take() {
            self.accept(snapshot)?;
        }
        info!(
            game_id = %self.game_id,
            player_id = %self.local_id,
            drawn = %outcome.drawn_card.name,
            "drew"
        );
        Ok(outcome)
    }

    pub async fn submit_play(
        &mut self,
        request: &CardPlayRequest,
    ) -> Result<SyncUpdate, ClientError> {
        let snapshot = self.api.play(&self.game_id, request).await?;
        self.accept(snapshot)
    }

    pub async fn cpu_intent(&self, cpu_id: &PlayerId) -> Result<CpuIntent, ClientError> {
        self.api.cpu_intent(&self.game_id, cpu_id).await
    }

    pub async fn execute_cpu_intent(
        &mut self,
        intent: &CpuIntent,
    ) -> Result<SyncUpdate, ClientError> {
        let snapshot = self.api.execute_cpu_intent(&self.game_id, intent).await?;
        self.accept(snapshot)
    }

    pub async fn advance_round(&mut self) -> Result<SyncUpdate, ClientError> {
        let snapshot = self.api.advance_round(&self.game_id).await?;
        self.accept(snapshot)
    }
}
