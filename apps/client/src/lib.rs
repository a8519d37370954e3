#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod input;
pub mod presenter;
pub mod protocol;
pub mod services;
pub mod session;

// Re-exports for public API
pub use config::{ClientConfig, PacingConfig};
pub use domain::{Card, CardType, GameId, PlayerId};
pub use error::ClientError;
pub use errors::ErrorCode;
pub use infra::{GameApi, HttpGameApi, RetryPolicy};
pub use input::Point;
pub use presenter::{Narration, Presenter, RoundSummary, TracingPresenter};
pub use protocol::{CardPlayRequest, CpuIntent, DrawOutcome, GameStateSnapshot, PlayerInfo};
pub use services::LocalView;
pub use session::{GameSession, InputPhase, SessionHandle};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    client_test_support::logging::init();
}
