//! Wire shapes exchanged with the game server (camelCase JSON).

pub mod game_state;
pub mod requests;

pub use game_state::{GameStateSnapshot, PlayerInfo, PlayerKind};
pub use requests::{CardPlayRequest, CpuIntent, DrawOutcome};
