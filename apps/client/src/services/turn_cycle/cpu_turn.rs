use tracing::info;

use super::{CycleState, TurnCycle};
use crate::config::pause;
use crate::error::ClientError;
use crate::presenter::Narration;
use crate::protocol::PlayerInfo;
use crate::session::InputPhase;

impl TurnCycle {
    /// Fetch the CPU seat's intent and execute exactly that intent.
    ///
    /// Any failure here is returned as-is and ends the loop.
    pub(super) async fn cpu_turn(&mut self, cpu: &PlayerInfo) -> Result<(), ClientError> {
        self.ctx.set_phase(InputPhase::Idle);
        let pacing = self.pacing;

        pause(pacing.cpu_announce).await;
        self.ctx.presenter().narrate(&Narration::CardDrawn {
            player_name: cpu.name.clone(),
        });
        pause(pacing.cpu_draw).await;

        self.enter(CycleState::AwaitingCompletion);
        let intent = self.sync.cpu_intent(&cpu.id).await?;
        self.ctx.presenter().narrate(&Narration::CpuThinking {
            player_name: cpu.name.clone(),
        });
        pause(pacing.cpu_thinking).await;

        let update = self.sync.execute_cpu_intent(&intent).await?;
        let card = intent.card_to_play.clone();
        self.discard.push(card.clone());
        info!(
            game_id = %self.sync.game_id(),
            player_id = %cpu.id,
            card = %card.name,
            target = ?intent.target_id,
            guess = ?intent.guess_number,
            "cpu played"
        );

        let presenter = self.ctx.presenter();
        presenter.show_discards(&self.discard);
        let target_name = intent
            .target_id
            .as_ref()
            .map(|id| {
                update
                    .snapshot
                    .player(id)
                    .map(|p| p.name.clone())
                    .ok_or_else(|| ClientError::missing("cpu target", id))
            })
            .transpose()?;
        presenter.narrate(&Narration::CardPlayed {
            player_name: cpu.name.clone(),
            card,
            target_name,
            guess: intent.guess_number,
        });
        if let Some(reasoning) = intent.reasoning.as_ref() {
            presenter.narrate(&Narration::CpuReasoning {
                player_name: cpu.name.clone(),
                reasoning: reasoning.clone(),
            });
        }

        pause(pacing.cpu_after_play).await;
        self.show(&update);
        Ok(())
    }
}
