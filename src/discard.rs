//! Discard selection: ranking every keep/discard split of a dealt hand.

use alloc::vec::Vec;

use crate::card::{Card, full_deck};
use crate::error::DiscardError;
use crate::hand::{Hand, KEEP_SIZE};
use crate::score::heuristic_discard_score;

/// One way to split a dealt 6-card hand into a 4-card keep and a 2-card discard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscardOption {
    keep: Hand,
    discard: Hand,
}

/// Lowest and highest keep score over every possible cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    /// Worst-case show score.
    pub min: u16,
    /// Best-case show score.
    pub max: u16,
}

/// An option together with its evaluation, for hint output.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscardAnalysis {
    /// The evaluated split.
    pub option: DiscardOption,
    /// Average show score adjusted by the crib heuristic.
    pub expected_value: f64,
    /// Keep score range over all unseen cuts.
    pub range: ScoreRange,
}

impl DiscardOption {
    pub(crate) const fn new(keep: Hand, discard: Hand) -> Self {
        Self { keep, discard }
    }

    /// Cards kept for the show.
    #[must_use]
    pub const fn keep(&self) -> &Hand {
        &self.keep
    }

    /// Cards sent to the crib.
    #[must_use]
    pub const fn discard(&self) -> &Hand {
        &self.discard
    }

    /// Splits the option into `(keep, discard)`.
    #[must_use]
    pub fn into_parts(self) -> (Hand, Hand) {
        (self.keep, self.discard)
    }

    /// Cards that could still be cut: the deck minus the six known cards.
    #[must_use]
    pub fn unseen_cards(&self) -> Vec<Card> {
        let mut known = self.keep.cards().to_vec();
        known.extend_from_slice(self.discard.cards());
        Hand::from(full_deck()).difference(&known).cards().to_vec()
    }

    /// Heuristic value of the two discarded cards.
    #[must_use]
    pub fn crib_heuristic(&self) -> u8 {
        match self.discard.cards() {
            [first, second] => heuristic_discard_score(*first, *second),
            _ => 0,
        }
    }

    /// Expected show value of this split.
    ///
    /// Averages the keep score over every unseen cut, then adds the crib
    /// heuristic for the dealer or subtracts it for the pone.
    #[must_use]
    pub fn expected_value(&self, is_dealer: bool) -> f64 {
        let cuts = self.unseen_cards();
        if cuts.is_empty() {
            return 0.0;
        }

        let total: u32 = cuts
            .iter()
            .map(|&cut| u32::from(self.keep.total(cut, false)))
            .sum();
        #[expect(
            clippy::cast_precision_loss,
            reason = "at most 52 cuts, exact in f64"
        )]
        let expected_show = f64::from(total) / cuts.len() as f64;

        let crib = f64::from(self.crib_heuristic());
        if is_dealer {
            expected_show + crib
        } else {
            expected_show - crib
        }
    }

    /// Lowest and highest keep score across every unseen cut.
    #[must_use]
    pub fn score_range(&self) -> ScoreRange {
        let mut range = ScoreRange { min: u16::MAX, max: 0 };
        for cut in self.unseen_cards() {
            let points = self.keep.total(cut, false);
            range.min = range.min.min(points);
            range.max = range.max.max(points);
        }
        if range.min > range.max {
            range.min = 0;
        }
        range
    }
}

/// Returns the option with the strictly greatest expected value.
///
/// Ties keep the first option seen. Returns `None` for an empty slice.
#[must_use]
pub fn optimal_discard(options: &[DiscardOption], is_dealer: bool) -> Option<&DiscardOption> {
    let mut best: Option<(&DiscardOption, f64)> = None;
    for option in options {
        let value = option.expected_value(is_dealer);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((option, value)),
        }
    }

    if let Some((option, value)) = best {
        tracing::debug!(
            target: "cribrs::discard",
            is_dealer,
            keep = ?option.keep.cards(),
            discard = ?option.discard.cards(),
            expected_value = value,
            "selected discard"
        );
    }

    best.map(|(option, _)| option)
}

/// Splits a dealt hand and returns its best option.
///
/// # Errors
///
/// Returns [`DiscardError::HandSize`] if `hand` does not hold exactly 6 cards.
pub fn best_discard(hand: &Hand, is_dealer: bool) -> Result<DiscardOption, DiscardError> {
    let options = hand.split(KEEP_SIZE)?;
    // A 6-card split always yields 15 options, so there is always a best one.
    optimal_discard(&options, is_dealer)
        .cloned()
        .ok_or(DiscardError::InvalidSelection)
}

/// Evaluates every option, in input order.
#[must_use]
pub fn analyze_discards(options: &[DiscardOption], is_dealer: bool) -> Vec<DiscardAnalysis> {
    options
        .iter()
        .map(|option| DiscardAnalysis {
            option: option.clone(),
            expected_value: option.expected_value(is_dealer),
            range: option.score_range(),
        })
        .collect()
}
