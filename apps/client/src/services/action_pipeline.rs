//! The local player's pending action, from draw to commit.
//!
//! `Drawn -> CardSelected -> [TargetSelection] -> [GuessSelection] ->
//! Submitting -> Committed`. Cancel returns to `Drawn` from any selection
//! stage; a failed submission reverts to `Drawn` with nothing committed.

use tracing::debug;

use crate::domain::{
    resolve_targets, Card, DiscardHistory, PlayerId, TargetResolution, GUESS_RANKS,
};
use crate::errors::domain::DomainError;
use crate::protocol::{CardPlayRequest, GameStateSnapshot, PlayerInfo};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PipelineStage {
    #[default]
    Idle,
    Drawn,
    CardSelected,
    TargetSelection {
        eligible: Vec<PlayerInfo>,
    },
    GuessSelection,
    Submitting,
    Committed,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "Idle",
            PipelineStage::Drawn => "Drawn",
            PipelineStage::CardSelected => "CardSelected",
            PipelineStage::TargetSelection { .. } => "TargetSelection",
            PipelineStage::GuessSelection => "GuessSelection",
            PipelineStage::Submitting => "Submitting",
            PipelineStage::Committed => "Committed",
        }
    }

    fn is_selecting(&self) -> bool {
        matches!(
            self,
            PipelineStage::CardSelected
                | PipelineStage::TargetSelection { .. }
                | PipelineStage::GuessSelection
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub card: Card,
    pub target: Option<PlayerId>,
    pub guess: Option<u8>,
}

impl PendingAction {
    pub fn to_request(&self, actor: &PlayerId) -> CardPlayRequest {
        CardPlayRequest {
            player_id: actor.clone(),
            card_id: self.card.id.clone(),
            target_id: self.target.clone(),
            guess_number: self.guess,
        }
    }
}

/// What the pipeline needs next from its driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A fresh snapshot is needed to enumerate targets.
    NeedTargets,
    ChooseTarget(Vec<PlayerInfo>),
    ChooseGuess(Vec<u8>),
    /// The action is complete; submit it.
    Submit(PendingAction),
}

#[derive(Debug, Default)]
pub struct ActionPipeline {
    stage: PipelineStage,
    hand: Vec<Card>,
    selected: usize,
    pending: Option<PendingAction>,
}

impl ActionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &PipelineStage {
        &self.stage
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Start a turn with the cards the draw made playable.
    pub fn on_draw(&mut self, playable: Vec<Card>) -> Result<(), DomainError> {
        if !matches!(self.stage, PipelineStage::Idle | PipelineStage::Committed) {
            return Err(self.mismatch("Idle"));
        }
        if playable.is_empty() {
            return Err(DomainError::EmptyHand);
        }
        self.hand = playable;
        self.selected = 0;
        self.pending = None;
        self.stage = PipelineStage::Drawn;
        Ok(())
    }

    /// Rotate the displayed card by `direction`, wrapping at both ends.
    pub fn switch(&mut self, direction: i8) -> Result<usize, DomainError> {
        self.expect_drawn()?;
        let len = self.hand.len() as isize;
        self.selected = (self.selected as isize + direction as isize).rem_euclid(len) as usize;
        Ok(self.selected)
    }

    pub fn select_card(&mut self, index: usize) -> Result<Step, DomainError> {
        self.expect_drawn()?;
        let card = self
            .hand
            .get(index)
            .cloned()
            .ok_or(DomainError::NoCardAtIndex(index))?;
        self.selected = index;

        let requires_target = card.card_type.requires_target();
        debug!(card = %card.name, requires_target, "card selected");
        self.pending = Some(PendingAction {
            card,
            target: None,
            guess: None,
        });

        if requires_target {
            self.stage = PipelineStage::CardSelected;
            Ok(Step::NeedTargets)
        } else {
            self.submitting()
        }
    }

    /// Enumerate targets for the selected card against `snapshot`.
    ///
    /// With nobody eligible a self-applicable card targets `actor`; any other
    /// card is submitted with neither target nor guess.
    pub fn offer_targets(
        &mut self,
        snapshot: &GameStateSnapshot,
        actor: &PlayerId,
    ) -> Result<Step, DomainError> {
        if self.stage != PipelineStage::CardSelected {
            return Err(self.mismatch("CardSelected"));
        }
        let card_type = self.pending_mut("CardSelected")?.card.card_type;

        match resolve_targets(snapshot, actor, card_type) {
            TargetResolution::Choose(eligible) => {
                self.stage = PipelineStage::TargetSelection {
                    eligible: eligible.clone(),
                };
                Ok(Step::ChooseTarget(eligible))
            }
            TargetResolution::AutoSelf => {
                self.pending_mut("CardSelected")?.target = Some(actor.clone());
                self.submitting()
            }
            TargetResolution::NoEffect => self.submitting(),
        }
    }

    pub fn choose_target(&mut self, target: &PlayerId) -> Result<Step, DomainError> {
        let PipelineStage::TargetSelection { eligible } = &self.stage else {
            return Err(self.mismatch("TargetSelection"));
        };
        if !eligible.iter().any(|p| &p.id == target) {
            return Err(DomainError::TargetNotEligible(target.clone()));
        }

        let pending = self.pending_mut("TargetSelection")?;
        pending.target = Some(target.clone());
        if pending.card.card_type.requires_guess() {
            self.stage = PipelineStage::GuessSelection;
            Ok(Step::ChooseGuess(GUESS_RANKS.collect()))
        } else {
            self.submitting()
        }
    }

    pub fn choose_guess(&mut self, guess: u8) -> Result<Step, DomainError> {
        if self.stage != PipelineStage::GuessSelection {
            return Err(self.mismatch("GuessSelection"));
        }
        if !GUESS_RANKS.contains(&guess) {
            return Err(DomainError::GuessOutOfRange(guess));
        }
        self.pending_mut("GuessSelection")?.guess = Some(guess);
        self.submitting()
    }

    /// Abandon the selection in progress and return to `Drawn`.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if !self.stage.is_selecting() {
            return Err(self.mismatch("TargetSelection"));
        }
        self.pending = None;
        self.stage = PipelineStage::Drawn;
        Ok(())
    }

    /// The submission succeeded: record the card and close the action.
    pub fn commit(&mut self, discard: &mut DiscardHistory) -> Result<Card, DomainError> {
        if self.stage != PipelineStage::Submitting {
            return Err(self.mismatch("Submitting"));
        }
        let action = self
            .pending
            .take()
            .ok_or_else(|| DomainError::phase("Submitting", "Idle"))?;
        discard.push(action.card.clone());
        self.hand.clear();
        self.stage = PipelineStage::Committed;
        Ok(action.card)
    }

    /// The submission failed: nothing was committed, pick again from `Drawn`.
    pub fn revert(&mut self) -> Result<(), DomainError> {
        if self.stage != PipelineStage::Submitting {
            return Err(self.mismatch("Submitting"));
        }
        self.pending = None;
        self.stage = PipelineStage::Drawn;
        Ok(())
    }

    /// Drop everything, including an unsubmitted action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn submitting(&mut self) -> Result<Step, DomainError> {
        let action = self
            .pending
            .clone()
            .ok_or_else(|| self.mismatch("CardSelected"))?;
        self.stage = PipelineStage::Submitting;
        Ok(Step::Submit(action))
    }

    fn expect_drawn(&self) -> Result<(), DomainError> {
        if self.stage == PipelineStage::Drawn {
            Ok(())
        } else {
            Err(self.mismatch("Drawn"))
        }
    }

    fn pending_mut(&mut self, expected: &'static str) -> Result<&mut PendingAction, DomainError> {
        let actual = self.stage.name();
        self.pending
            .as_mut()
            .ok_or(DomainError::phase(expected, actual))
    }

    fn mismatch(&self, expected: &'static str) -> DomainError {
        DomainError::phase(expected, self.stage.name())
    }
}
