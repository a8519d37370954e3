//! Local rule errors raised by the client's own state machines.
//!
//! These never come from the server. They mean a gesture, selection or
//! decoded card did not fit the state it arrived in. Callers convert them
//! into `crate::error::ClientError` with `?`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::cards_types::CardType;
use crate::domain::ids::PlayerId;

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Card rank outside 1..=8
    InvalidRank(u8),
    /// Server card whose rank does not match its type
    RankTypeMismatch { card_type: CardType, rank: u8 },
    /// Draw produced no playable cards
    EmptyHand,
    /// Selected index is outside the drawn cards
    NoCardAtIndex(usize),
    /// Target was not among the offered targets
    TargetNotEligible(PlayerId),
    /// Guess outside the Guard's legal ranks
    GuessOutOfRange(u8),
    /// Operation arrived in the wrong pipeline stage
    PhaseMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidRank(rank) => write!(f, "invalid card rank {rank}"),
            DomainError::RankTypeMismatch { card_type, rank } => {
                write!(f, "card type {card_type:?} does not carry rank {rank}")
            }
            DomainError::EmptyHand => write!(f, "draw returned no playable cards"),
            DomainError::NoCardAtIndex(index) => write!(f, "no card at index {index}"),
            DomainError::TargetNotEligible(id) => write!(f, "player {id} is not a legal target"),
            DomainError::GuessOutOfRange(guess) => write!(f, "guess {guess} is out of range"),
            DomainError::PhaseMismatch { expected, actual } => {
                write!(f, "expected pipeline stage {expected}, was {actual}")
            }
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn phase(expected: &'static str, actual: &'static str) -> Self {
        Self::PhaseMismatch { expected, actual }
    }
}
