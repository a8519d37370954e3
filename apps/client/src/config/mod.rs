pub mod client;
pub mod pacing;

pub use client::ClientConfig;
pub use pacing::{pause, PacingConfig};
