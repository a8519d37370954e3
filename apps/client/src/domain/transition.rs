// apps/client/src/domain/transition.rs

use crate::domain::ids::PlayerId;
use crate::protocol::game_state::GameStateSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: a player went from alive to eliminated.
    PlayerEliminated { player_id: PlayerId },

    /// Edge-triggered: a player gained protection.
    PlayerProtected { player_id: PlayerId },

    /// Edge-triggered: running round -> round over
    RoundEnded { winner_id: Option<PlayerId> },

    /// Edge-triggered: round over -> running round, or round number advanced
    RoundStarted { round: u32 },
}

/// Derive transitions from the previous snapshot (if any) to the new one.
///
/// With no previous snapshot only the turn is reported.
pub fn derive_transitions(
    before: Option<&GameStateSnapshot>,
    after: &GameStateSnapshot,
) -> Vec<SnapshotTransition> {
    let mut transitions = Vec::new();

    // 1. Turn change
    if let Some(player_id) = after.current_player_id.as_ref() {
        if !after.round_over && before.and_then(|b| b.current_player_id.as_ref()) != Some(player_id)
        {
            transitions.push(SnapshotTransition::TurnBecame {
                player_id: player_id.clone(),
            });
        }
    }

    let Some(before) = before else {
        return transitions;
    };

    // 2. Per-player status edges
    for player in &after.players {
        let Some(prev) = before.player(&player.id) else {
            continue;
        };
        if prev.alive && !player.alive {
            transitions.push(SnapshotTransition::PlayerEliminated {
                player_id: player.id.clone(),
            });
        }
        if !prev.protected && player.protected {
            transitions.push(SnapshotTransition::PlayerProtected {
                player_id: player.id.clone(),
            });
        }
    }

    // 3. Round end (!over -> over)
    if !before.round_over && after.round_over {
        transitions.push(SnapshotTransition::RoundEnded {
            winner_id: after.round_winner_id.clone(),
        });
    }

    // 4. Round start (over -> !over, or a new round number)
    if (before.round_over && !after.round_over) || after.current_round > before.current_round {
        transitions.push(SnapshotTransition::RoundStarted {
            round: after.current_round,
        });
    }

    transitions
}
