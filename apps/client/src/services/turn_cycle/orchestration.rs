use tracing::debug;

use super::{CycleState, TurnCycle, TurnOwner};
use crate::config::pause;
use crate::domain::{PlayerId, SnapshotTransition};
use crate::error::ClientError;
use crate::presenter::Narration;
use crate::services::state_sync::SyncUpdate;
use crate::session::InputPhase;

impl TurnCycle {
    /// Load the table, then cycle until a fatal failure.
    ///
    /// The initial load is not retried past the poll's own policy; failing it
    /// ends the session.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        self.load().await?;
        loop {
            self.cycle().await?;
        }
    }

    async fn load(&mut self) -> Result<(), ClientError> {
        self.enter(CycleState::Loading);
        self.ctx.set_phase(InputPhase::Busy);
        self.ctx.presenter().narrate(&Narration::Loading);

        let update = self.sync.poll().await?;
        self.show(&update);
        self.ctx.presenter().narrate(&Narration::GameStarted {
            game_id: self.sync.game_id().clone(),
        });
        pause(self.pacing.first_turn).await;
        Ok(())
    }

    /// One pass: poll, then dispatch the turn or hold the round summary.
    pub async fn cycle(&mut self) -> Result<(), ClientError> {
        self.enter(CycleState::Polling);
        let update = self.sync.poll().await?;
        self.show(&update);
        let snapshot = update.snapshot;

        if snapshot.round_over {
            self.enter(CycleState::RoundOver);
            return self.round_over(&snapshot).await;
        }

        let current = snapshot.current_player()?.clone();
        if &current.id == self.sync.local_id() {
            self.enter(CycleState::Dispatching(TurnOwner::Human));
            self.human_turn(&current).await?;
        } else {
            self.enter(CycleState::Dispatching(TurnOwner::Cpu));
            self.cpu_turn(&current).await?;
        }

        pause(self.pacing.between_cycles).await;
        Ok(())
    }

    pub(super) fn enter(&mut self, state: CycleState) {
        self.state = state;
        debug!(
            game_id = %self.sync.game_id(),
            state = ?state,
            "cycle state"
        );
    }

    /// Render an accepted snapshot and narrate how it differs from the last.
    pub(super) fn show(&self, update: &SyncUpdate) {
        let presenter = self.ctx.presenter();
        let snapshot = &update.snapshot;
        presenter.render(snapshot, self.sync.view());

        let name_of = |id: &PlayerId| snapshot.player(id).map(|p| p.name.clone());
        for transition in &update.transitions {
            let narration = match transition {
                SnapshotTransition::TurnBecame { player_id } => {
                    name_of(player_id).map(|player_name| Narration::TurnStarted {
                        player_name,
                        is_local: player_id == self.sync.local_id(),
                    })
                }
                SnapshotTransition::PlayerEliminated { player_id } => name_of(player_id)
                    .map(|player_name| Narration::PlayerEliminated { player_name }),
                SnapshotTransition::PlayerProtected { player_id } => name_of(player_id)
                    .map(|player_name| Narration::PlayerProtected { player_name }),
                SnapshotTransition::RoundEnded { winner_id } => winner_id
                    .as_ref()
                    .and_then(name_of)
                    .or_else(|| snapshot.round_winner_name.clone())
                    .map(|winner_name| Narration::RoundEnded { winner_name }),
                SnapshotTransition::RoundStarted { round } => {
                    Some(Narration::RoundStarted { round: *round })
                }
            };
            if let Some(narration) = narration {
                presenter.narrate(&narration);
            }
        }
    }
}
