pub mod action_pipeline;
pub mod state_sync;
pub mod turn_cycle;

#[cfg(test)]
mod tests_action_pipeline;

pub use action_pipeline::{ActionPipeline, PendingAction, PipelineStage, Step};
pub use state_sync::{LocalView, StateSync, SyncUpdate};
pub use turn_cycle::{CycleState, TurnCycle, TurnOwner};
