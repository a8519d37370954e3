use tracing::{debug, info};

use super::TurnCycle;
use crate::config::pause;
use crate::error::ClientError;
use crate::presenter::RoundSummary;
use crate::protocol::GameStateSnapshot;
use crate::session::{InputPhase, TurnInput};

impl TurnCycle {
    /// Show the finished round and hold until next round succeeds.
    ///
    /// A failed next-round request is reported and the summary stays up for
    /// another attempt.
    pub(super) async fn round_over(
        &mut self,
        snapshot: &GameStateSnapshot,
    ) -> Result<(), ClientError> {
        self.ctx.set_phase(InputPhase::Busy);
        self.pipeline.reset();

        pause(self.pacing.round_over).await;
        let summary = RoundSummary::from_snapshot(snapshot)?;
        info!(
            game_id = %self.sync.game_id(),
            round = summary.round,
            winner = %summary.winner.id,
            "round over"
        );
        self.ctx.set_phase(InputPhase::RoundOver);
        self.ctx.presenter().show_round_over(&summary);

        loop {
            match self.ctx.next_input().await? {
                TurnInput::NextRound => {}
                other => {
                    debug!(input = ?other, "waiting for next round");
                    self.ctx.set_phase(InputPhase::RoundOver);
                    continue;
                }
            }

            match self.sync.advance_round().await {
                Ok(update) => {
                    self.discard.clear();
                    self.pipeline.reset();
                    self.ctx.reset_selection();
                    self.ctx.set_phase(InputPhase::Idle);
                    self.ctx.presenter().show_discards(&self.discard);
                    self.show(&update);
                    info!(
                        game_id = %self.sync.game_id(),
                        round = update.snapshot.current_round,
                        "next round"
                    );
                    pause(self.pacing.between_cycles).await;
                    return Ok(());
                }
                Err(e) if e.is_transport() => {
                    self.ctx.set_phase(InputPhase::RoundOver);
                    self.ctx.presenter().report_error(&e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
