//! Turn-cycle controller: polls the table and routes each turn to the
//! human or CPU handler.
//!
//! `Polling -> Dispatching(Human|Cpu) -> AwaitingCompletion -> Polling`,
//! with `RoundOver` reached from `Polling` and left by an explicit
//! next-round input.

mod cpu_turn;
mod human_turn;
mod orchestration;
mod round_lifecycle;

use crate::config::PacingConfig;
use crate::domain::DiscardHistory;
use crate::services::action_pipeline::ActionPipeline;
use crate::services::state_sync::StateSync;
use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOwner {
    Human,
    Cpu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Loading,
    Polling,
    Dispatching(TurnOwner),
    AwaitingCompletion,
    RoundOver,
}

pub struct TurnCycle {
    sync: StateSync,
    pipeline: ActionPipeline,
    discard: DiscardHistory,
    pacing: PacingConfig,
    ctx: SessionContext,
    state: CycleState,
}

impl TurnCycle {
    pub fn new(sync: StateSync, pacing: PacingConfig, ctx: SessionContext) -> Self {
        Self {
            sync,
            pipeline: ActionPipeline::new(),
            discard: DiscardHistory::new(),
            pacing,
            ctx,
            state: CycleState::Loading,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn discard(&self) -> &DiscardHistory {
        &self.discard
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }
}
