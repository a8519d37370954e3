//! Target eligibility for the local player's selected card.

use super::cards_types::{CardType, Targeting};
use super::ids::PlayerId;
use crate::protocol::game_state::{GameStateSnapshot, PlayerInfo};

/// How a target-requiring card resolves against one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetResolution {
    /// At least one player may be chosen.
    Choose(Vec<PlayerInfo>),
    /// Nobody else is eligible; the self-applicable card falls back on its actor.
    AutoSelf,
    /// Nobody is eligible; the card is discarded with no effect.
    NoEffect,
}

/// Living, unprotected players the card may be aimed at, in seat order.
///
/// The actor is excluded unless the card type is self-applicable. Cards
/// without a target have no eligible players.
pub fn eligible_targets<'a>(
    snapshot: &'a GameStateSnapshot,
    actor: &PlayerId,
    card_type: CardType,
) -> Vec<&'a PlayerInfo> {
    let include_self = match card_type.targeting() {
        Targeting::None => return Vec::new(),
        Targeting::Opponent => false,
        Targeting::AnyPlayer => true,
    };
    snapshot
        .players
        .iter()
        .filter(|p| p.alive && !p.protected)
        .filter(|p| include_self || &p.id != actor)
        .collect()
}

pub fn resolve_targets(
    snapshot: &GameStateSnapshot,
    actor: &PlayerId,
    card_type: CardType,
) -> TargetResolution {
    let eligible = eligible_targets(snapshot, actor, card_type);
    if !eligible.is_empty() {
        return TargetResolution::Choose(eligible.into_iter().cloned().collect());
    }
    if card_type.is_self_applicable() {
        TargetResolution::AutoSelf
    } else {
        TargetResolution::NoEffect
    }
}
