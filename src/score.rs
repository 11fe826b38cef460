//! Show scoring: fifteens, pairs, runs, flush, and nobs.
//!
//! Every function returns points already multiplied by their per-occurrence
//! value, and none of them fail for any card set.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::hand::Hand;

/// Largest number of cards the bitmask subset walk supports.
const MAX_SUBSET_CARDS: usize = 16;

/// Per-rank card counts, indexed by raw rank value.
fn rank_counts(cards: &[Card]) -> [u8; 14] {
    let mut counts = [0u8; 14];
    for card in cards {
        let count = &mut counts[card.value() as usize];
        *count = count.saturating_add(1);
    }
    counts
}

/// Points for every subset of two or more cards whose capped values sum to 15.
///
/// Subsets are walked as bitmasks over at most the first 16 cards; any later
/// cards are not counted. A show set is 5 cards. The result saturates at
/// `u8::MAX`.
#[must_use]
pub fn score_fifteens(cards: &[Card]) -> u8 {
    let values: Vec<u8> = cards
        .iter()
        .take(MAX_SUBSET_CARDS)
        .map(|c| c.count_value())
        .collect();
    let n = values.len();

    let mut points: u8 = 0;
    for mask in 1u32..(1 << n) {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: u32 = values
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| u32::from(v))
            .sum();
        if sum == 15 {
            points = points.saturating_add(2);
        }
    }
    points
}

/// Points for pairs: a rank held `m` times scores `2 * C(m, 2)`.
#[must_use]
pub fn score_pairs(cards: &[Card]) -> u8 {
    rank_counts(cards)
        .iter()
        .fold(0u8, |points, &m| {
            points.saturating_add(m.saturating_mul(m.saturating_sub(1)))
        })
}

/// Points for the best run of three or more consecutive ranks.
///
/// Duplicated ranks inside the run multiply it (a double run of three scores 6).
/// Only the longest run length counts; shorter windows are tried only when no
/// longer window forms a run. The result saturates at `u8::MAX`.
#[must_use]
pub fn score_runs(cards: &[Card]) -> u8 {
    let counts = rank_counts(cards);
    let ranks: Vec<u8> = (1..=13u8).filter(|&r| counts[r as usize] > 0).collect();

    for length in (3..=ranks.len()).rev() {
        let best = ranks
            .windows(length)
            .filter(|window| window[length - 1] - window[0] == length as u8 - 1)
            .map(|window| {
                let multiplier = window
                    .iter()
                    .fold(1u32, |acc, &r| acc.saturating_mul(u32::from(counts[r as usize])));
                let points = multiplier.saturating_mul(length as u32);
                u8::try_from(points).unwrap_or(u8::MAX)
            })
            .max();
        if let Some(points) = best {
            return points;
        }
    }
    0
}

/// Points for a flush.
///
/// All hand cards (the cut excluded) must share a suit. A matching cut makes
/// it 5; otherwise 4 for a hand and nothing for a crib.
#[must_use]
pub fn score_flush(hand: &[Card], cut: Card, is_crib: bool) -> u8 {
    let Some(first) = hand.first() else {
        return 0;
    };
    if hand.iter().any(|c| c.suit != first.suit) {
        return 0;
    }

    if cut.suit == first.suit {
        5
    } else if is_crib {
        0
    } else {
        4
    }
}

/// One point for a Jack in hand matching the cut's suit.
#[must_use]
pub fn score_nobs(hand: &[Card], cut: Card) -> u8 {
    u8::from(
        hand.iter()
            .any(|c| c.rank == Rank::Jack && c.suit == cut.suit),
    )
}

/// Cut-independent estimate of what two crib cards are worth.
///
/// Counts only the sure points: 2 if their capped values make 15, 2 more if
/// they pair. Run, flush and nobs potential are ignored.
#[must_use]
pub const fn heuristic_discard_score(first: Card, second: Card) -> u8 {
    let mut points = 0;
    if first.count_value() + second.count_value() == 15 {
        points += 2;
    }
    if first.value() == second.value() {
        points += 2;
    }
    points
}

/// Points scored by a hand or crib at the show, by category.
///
/// Breakdowns add category by category, so a running tally over many shows
/// fits the same `u16` range as a player's total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreBreakdown {
    /// Points from fifteens (2 each).
    pub fifteens: u16,
    /// Points from pairs and multiples.
    pub pairs: u16,
    /// Points from runs.
    pub runs: u16,
    /// Points from a flush.
    pub flush: u16,
    /// Point for nobs.
    pub nobs: u16,
    /// Sum of all categories.
    pub total: u16,
}

impl ScoreBreakdown {
    /// Builds a breakdown and fills in the total.
    #[must_use]
    pub const fn new(fifteens: u16, pairs: u16, runs: u16, flush: u16, nobs: u16) -> Self {
        Self {
            fifteens,
            pairs,
            runs,
            flush,
            nobs,
            total: fifteens
                .saturating_add(pairs)
                .saturating_add(runs)
                .saturating_add(flush)
                .saturating_add(nobs),
        }
    }

    /// Number of distinct fifteens counted.
    #[must_use]
    pub const fn fifteen_count(&self) -> u16 {
        self.fifteens / 2
    }

    /// Number of pairs counted (a triple is three pairs).
    #[must_use]
    pub const fn pair_count(&self) -> u16 {
        self.pairs / 2
    }
}

impl core::ops::Add for ScoreBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.fifteens.saturating_add(rhs.fifteens),
            self.pairs.saturating_add(rhs.pairs),
            self.runs.saturating_add(rhs.runs),
            self.flush.saturating_add(rhs.flush),
            self.nobs.saturating_add(rhs.nobs),
        )
    }
}

impl Hand {
    /// Scores the hand at the show against `cut`.
    ///
    /// Fifteens, pairs and runs use the hand plus the cut; flush and nobs look at
    /// the hand cards alone against the cut.
    #[must_use]
    pub fn score(&self, cut: Card, is_crib: bool) -> ScoreBreakdown {
        let mut all = self.cards().to_vec();
        all.push(cut);

        ScoreBreakdown::new(
            u16::from(score_fifteens(&all)),
            u16::from(score_pairs(&all)),
            u16::from(score_runs(&all)),
            u16::from(score_flush(self.cards(), cut, is_crib)),
            u16::from(score_nobs(self.cards(), cut)),
        )
    }

    /// Total points for the hand against `cut`.
    #[must_use]
    pub fn total(&self, cut: Card, is_crib: bool) -> u16 {
        self.score(cut, is_crib).total
    }
}
