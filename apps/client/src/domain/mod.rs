//! Domain layer: card types, table bookkeeping and snapshot diffing.
//!
//! Pure values only; no transport and no timing.

pub mod cards_types;
pub mod discard;
pub mod ids;
pub mod targeting;
pub mod transition;

#[cfg(test)]
mod tests_targeting;

// Re-exports for ergonomics
pub use cards_types::{Card, CardType, Targeting, GUESS_RANKS};
pub use discard::DiscardHistory;
pub use ids::{CardId, GameId, PlayerId};
pub use targeting::{eligible_targets, resolve_targets, TargetResolution};
pub use transition::{derive_transitions, SnapshotTransition};
