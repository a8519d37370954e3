use tracing::{debug, info};

use super::{CycleState, TurnCycle};
use crate::config::pause;
use crate::domain::GUESS_RANKS;
use crate::error::ClientError;
use crate::presenter::Narration;
use crate::protocol::{DrawOutcome, PlayerInfo};
use crate::services::action_pipeline::{PendingAction, PipelineStage, Step};
use crate::session::{InputPhase, TurnInput};

/// What the input loop does after one player input.
enum Flow {
    /// Keep the gate as it is.
    Stay,
    /// Reopen the gate for the pipeline's current stage.
    Rearm,
    /// The play was committed.
    Done,
}

impl TurnCycle {
    /// Draw, then drive the pipeline from player inputs until a play is
    /// committed.
    ///
    /// Transport failures of the draw, the target lookup and the play are
    /// reported and leave the player to act again.
    pub(super) async fn human_turn(&mut self, me: &PlayerInfo) -> Result<(), ClientError> {
        let drawn = self.draw_until_success().await?;
        self.ctx.presenter().narrate(&Narration::CardDrawn {
            player_name: me.name.clone(),
        });

        self.pipeline.reset();
        self.pipeline.on_draw(drawn.playable_cards)?;
        self.enter(CycleState::AwaitingCompletion);
        self.rearm();

        loop {
            let input = self.ctx.next_input().await?;
            debug!(?input, stage = self.pipeline.stage().name(), "input");
            match self.on_input(input, me).await {
                Ok(Flow::Done) => return Ok(()),
                Ok(Flow::Stay) => {}
                Ok(Flow::Rearm) => self.rearm(),
                Err(ClientError::UserCancelled) => {
                    debug!("selection cancelled");
                    self.back_to_drawn();
                }
                Err(e @ ClientError::Domain(_)) => {
                    self.rearm();
                    self.ctx.presenter().report_error(&e);
                }
                Err(e) if e.is_transport() => {
                    self.back_to_drawn();
                    self.ctx.presenter().report_error(&e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn draw_until_success(&mut self) -> Result<DrawOutcome, ClientError> {
        loop {
            self.ctx.set_phase(InputPhase::Busy);
            pause(self.pacing.human_draw).await;
            match self.sync.draw().await {
                Ok(outcome) => return Ok(outcome),
                Err(e) if e.is_transport() => {
                    self.ctx.set_phase(InputPhase::AwaitingRetry);
                    self.ctx.presenter().report_error(&e);
                    while self.ctx.next_input().await? != TurnInput::RetryDraw {}
                    info!(game_id = %self.sync.game_id(), "retrying draw");
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn on_input(&mut self, input: TurnInput, me: &PlayerInfo) -> Result<Flow, ClientError> {
        let step = match input {
            TurnInput::SwitchCard { direction } => {
                let selected = self.pipeline.switch(direction)?;
                self.ctx
                    .presenter()
                    .show_hand(self.pipeline.hand(), selected);
                return Ok(Flow::Stay);
            }
            TurnInput::PlayCard { index } => self.pipeline.select_card(index)?,
            TurnInput::SelectTarget(target) => self.pipeline.choose_target(&target)?,
            TurnInput::SelectGuess(guess) => self.pipeline.choose_guess(guess)?,
            TurnInput::CancelSelection => return Err(ClientError::UserCancelled),
            other @ (TurnInput::RetryDraw | TurnInput::NextRound) => {
                debug!(input = ?other, "not expected during a turn");
                return Ok(Flow::Stay);
            }
        };
        self.advance(step, me).await
    }

    async fn advance(&mut self, mut step: Step, me: &PlayerInfo) -> Result<Flow, ClientError> {
        loop {
            step = match step {
                Step::NeedTargets => {
                    self.ctx.set_phase(InputPhase::Busy);
                    let update = self.sync.poll().await?;
                    self.show(&update);
                    self.pipeline.offer_targets(&update.snapshot, &me.id)?
                }
                Step::ChooseTarget(_) | Step::ChooseGuess(_) => return Ok(Flow::Rearm),
                Step::Submit(action) => return self.submit(action, me).await,
            };
        }
    }

    async fn submit(
        &mut self,
        action: PendingAction,
        me: &PlayerInfo,
    ) -> Result<Flow, ClientError> {
        self.ctx.set_phase(InputPhase::Busy);
        self.ctx.presenter().dismiss_prompts();

        let request = action.to_request(&me.id);
        let update = self.sync.submit_play(&request).await?;
        let card = self.pipeline.commit(&mut self.discard)?;
        info!(
            game_id = %self.sync.game_id(),
            player_id = %me.id,
            card = %card.name,
            target = ?request.target_id,
            guess = ?request.guess_number,
            "played"
        );

        let presenter = self.ctx.presenter();
        presenter.reset_lift();
        presenter.show_discards(&self.discard);
        let target_name = request
            .target_id
            .as_ref()
            .map(|id| {
                update
                    .snapshot
                    .player(id)
                    .map(|p| p.name.clone())
                    .ok_or_else(|| ClientError::missing("played target", id))
            })
            .transpose()?;
        presenter.narrate(&Narration::CardPlayed {
            player_name: me.name.clone(),
            card,
            target_name,
            guess: request.guess_number,
        });

        pause(self.pacing.human_after_play).await;
        self.show(&update);
        self.pipeline.reset();
        self.ctx.set_phase(InputPhase::Idle);
        Ok(Flow::Done)
    }

    /// Abandon whatever was selected or in flight and show the hand again.
    fn back_to_drawn(&mut self) {
        let restored = match self.pipeline.stage() {
            PipelineStage::Submitting => self.pipeline.revert(),
            PipelineStage::CardSelected
            | PipelineStage::TargetSelection { .. }
            | PipelineStage::GuessSelection => self.pipeline.cancel(),
            _ => Ok(()),
        };
        if let Err(e) = restored {
            debug!(error = %e, "pipeline already settled");
        }
        let presenter = self.ctx.presenter();
        presenter.dismiss_prompts();
        presenter.reset_lift();
        self.rearm();
    }

    /// Open the gate for whatever the pipeline stage asks of the player,
    /// then show the matching prompt.
    fn rearm(&self) {
        let presenter = self.ctx.presenter();
        match self.pipeline.stage() {
            PipelineStage::Drawn => {
                self.ctx
                    .arm_hand(self.pipeline.hand().len(), self.pipeline.selected());
                presenter.show_hand(self.pipeline.hand(), self.pipeline.selected());
            }
            PipelineStage::TargetSelection { eligible } => {
                self.ctx.set_phase(InputPhase::AwaitingTarget);
                presenter.prompt_targets(eligible);
            }
            PipelineStage::GuessSelection => {
                self.ctx.set_phase(InputPhase::AwaitingGuess);
                let ranks: Vec<u8> = GUESS_RANKS.collect();
                presenter.prompt_guess(&ranks);
            }
            _ => self.ctx.set_phase(InputPhase::Busy),
        }
    }
}
