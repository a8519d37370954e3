//! Card types and card instances.
//!
//! Rank and effect type are one fixed mapping (1 Guard .. 8 Princess); the
//! server sends both and a card whose rank disagrees with its type is refused
//! at the decode boundary.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::ids::CardId;
use crate::errors::domain::DomainError;

/// Ranks a Guard may name. A Guard can never name another Guard.
pub const GUESS_RANKS: RangeInclusive<u8> = 2..=8;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Guard,
    Priest,
    Baron,
    Handmaid,
    Prince,
    King,
    Countess,
    Princess,
}

/// Who a card type may be aimed at.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Targeting {
    /// Played without a target.
    None,
    /// Another living, unprotected player.
    Opponent,
    /// Any living, unprotected player including the actor.
    AnyPlayer,
}

impl CardType {
    pub const ALL: [CardType; 8] = [
        CardType::Guard,
        CardType::Priest,
        CardType::Baron,
        CardType::Handmaid,
        CardType::Prince,
        CardType::King,
        CardType::Countess,
        CardType::Princess,
    ];

    pub const fn rank(self) -> u8 {
        match self {
            CardType::Guard => 1,
            CardType::Priest => 2,
            CardType::Baron => 3,
            CardType::Handmaid => 4,
            CardType::Prince => 5,
            CardType::King => 6,
            CardType::Countess => 7,
            CardType::Princess => 8,
        }
    }

    pub fn from_rank(rank: u8) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.rank() == rank)
            .ok_or(DomainError::InvalidRank(rank))
    }

    /// Fallback display name, used when the server omits one.
    pub const fn display_name(self) -> &'static str {
        match self {
            CardType::Guard => "Guard",
            CardType::Priest => "Priest",
            CardType::Baron => "Baron",
            CardType::Handmaid => "Handmaid",
            CardType::Prince => "Prince",
            CardType::King => "King",
            CardType::Countess => "Countess",
            CardType::Princess => "Princess",
        }
    }

    pub const fn targeting(self) -> Targeting {
        match self {
            CardType::Guard | CardType::Priest | CardType::Baron | CardType::King => {
                Targeting::Opponent
            }
            CardType::Prince => Targeting::AnyPlayer,
            CardType::Handmaid | CardType::Countess | CardType::Princess => Targeting::None,
        }
    }

    pub const fn requires_target(self) -> bool {
        !matches!(self.targeting(), Targeting::None)
    }

    pub const fn is_self_applicable(self) -> bool {
        matches!(self.targeting(), Targeting::AnyPlayer)
    }

    /// Guard: the chosen target must also be sent a rank guess.
    pub const fn requires_guess(self) -> bool {
        matches!(self, CardType::Guard)
    }
}

/// One physical card as the server describes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireCard", into = "WireCard")]
pub struct Card {
    pub id: CardId,
    pub card_type: CardType,
    pub name: String,
}

impl Card {
    pub fn new(id: impl Into<CardId>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            card_type,
            name: card_type.display_name().to_string(),
        }
    }

    pub fn rank(&self) -> u8 {
        self.card_type.rank()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireCard {
    id: CardId,
    #[serde(rename = "type")]
    card_type: CardType,
    #[serde(default)]
    number: Option<u8>,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<WireCard> for Card {
    type Error = DomainError;

    fn try_from(wire: WireCard) -> Result<Self, Self::Error> {
        if let Some(number) = wire.number {
            if number != wire.card_type.rank() {
                return Err(DomainError::RankTypeMismatch {
                    card_type: wire.card_type,
                    rank: number,
                });
            }
        }
        Ok(Card {
            id: wire.id,
            card_type: wire.card_type,
            name: wire
                .name
                .unwrap_or_else(|| wire.card_type.display_name().to_string()),
        })
    }
}

impl From<Card> for WireCard {
    fn from(card: Card) -> Self {
        WireCard {
            id: card.id,
            number: Some(card.card_type.rank()),
            card_type: card.card_type,
            name: Some(card.name),
        }
    }
}
