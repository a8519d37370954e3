//! Narrative delays between turn sub-steps. They carry no correctness
//! meaning; tests run with every delay at zero.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Before the first turn of a loaded game.
    pub first_turn: Duration,
    /// After a turn completes, before the next poll.
    pub between_cycles: Duration,
    /// After announcing a CPU turn, before showing it drew.
    pub cpu_announce: Duration,
    /// After showing the CPU drew, before asking for its intent.
    pub cpu_draw: Duration,
    /// "Thinking" pause between intent and execution.
    pub cpu_thinking: Duration,
    /// After a CPU play is shown.
    pub cpu_after_play: Duration,
    /// After a round-end summary, before accepting next round.
    pub round_over: Duration,
    /// Loading pause before the local player's draw.
    pub human_draw: Duration,
    /// After the human's played card is shown.
    pub human_after_play: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            first_turn: Duration::from_millis(1000),
            between_cycles: Duration::from_millis(1000),
            cpu_announce: Duration::from_millis(2000),
            cpu_draw: Duration::from_millis(2000),
            cpu_thinking: Duration::from_millis(2000),
            cpu_after_play: Duration::from_millis(2000),
            round_over: Duration::from_millis(1000),
            human_draw: Duration::from_millis(1000),
            human_after_play: Duration::from_millis(1500),
        }
    }
}

impl PacingConfig {
    pub const fn zero() -> Self {
        Self {
            first_turn: Duration::ZERO,
            between_cycles: Duration::ZERO,
            cpu_announce: Duration::ZERO,
            cpu_draw: Duration::ZERO,
            cpu_thinking: Duration::ZERO,
            cpu_after_play: Duration::ZERO,
            round_over: Duration::ZERO,
            human_draw: Duration::ZERO,
            human_after_play: Duration::ZERO,
        }
    }

    /// Default delays multiplied by `factor` (clamped at zero).
    pub fn scaled(factor: f64) -> Self {
        let base = Self::default();
        let f = factor.max(0.0);
        let s = |d: Duration| d.mul_f64(f);
        Self {
            first_turn: s(base.first_turn),
            between_cycles: s(base.between_cycles),
            cpu_announce: s(base.cpu_announce),
            cpu_draw: s(base.cpu_draw),
            cpu_thinking: s(base.cpu_thinking),
            cpu_after_play: s(base.cpu_after_play),
            round_over: s(base.round_over),
            human_draw: s(base.human_draw),
            human_after_play: s(base.human_after_play),
        }
    }
}

/// Sleep for `delay`, returning immediately for zero.
pub async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
