//! Greedy pegging move selection.

use alloc::vec::Vec;

use crate::card::Card;

use super::PegState;

/// Cards from `hand` that fit under 31, in hand order.
#[must_use]
pub fn legal_plays(state: &PegState, hand: &[Card]) -> Vec<Card> {
    hand.iter().copied().filter(|&c| state.can_play(c)).collect()
}

/// Greedy one-ply choice: the legal card scoring the most points right now.
///
/// Ties keep the first card in hand order. Returns `None` when nothing is
/// legal and the player must say go. Opponent replies are not considered.
#[must_use]
pub fn best_play(state: &PegState, hand: &[Card]) -> Option<Card> {
    let mut best: Option<(Card, u8)> = None;
    for card in legal_plays(state, hand) {
        let points = state.score_play(card).total();
        match best {
            Some((_, best_points)) if points <= best_points => {}
            _ => best = Some((card, points)),
        }
    }

    if let Some((card, points)) = best {
        tracing::trace!(
            target: "cribrs::pegging",
            sum = state.sum(),
            %card,
            points,
            "greedy play"
        );
    }

    best.map(|(card, _)| card)
}
