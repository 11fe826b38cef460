//! Points for a single pegging play: fifteen, thirty-one, pairs and runs.

use core::ops::Add;

use crate::card::Card;

/// Points earned by a single pegging play, by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PegScore {
    /// 2 when the count reaches exactly 15.
    pub fifteen: u8,
    /// 2 when the count reaches exactly 31.
    pub thirty_one: u8,
    /// Points for trailing cards of the same rank.
    pub pairs: u8,
    /// Points for a trailing run.
    pub run: u8,
}

impl PegScore {
    /// Total points for the play.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.fifteen + self.thirty_one + self.pairs + self.run
    }

    /// Whether the play scored anything.
    #[must_use]
    pub const fn is_scoring(&self) -> bool {
        self.total() > 0
    }
}

impl Add for PegScore {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            fifteen: self.fifteen + rhs.fifteen,
            thirty_one: self.thirty_one + rhs.thirty_one,
            pairs: self.pairs + rhs.pairs,
            run: self.run + rhs.run,
        }
    }
}

/// Number of cards at the end of the pile sharing the last card's rank.
#[must_use]
pub fn trailing_multiple(pile: &[Card]) -> usize {
    let Some(last) = pile.last() else {
        return 0;
    };
    pile.iter().rev().take_while(|c| c.rank == last.rank).count()
}

/// Points for trailing same-rank cards: pair 2, three 6, four 12.
#[must_use]
pub fn score_pile_pairs(pile: &[Card]) -> u8 {
    match trailing_multiple(pile) {
        2 => 2,
        3 => 6,
        4 => 12,
        _ => 0,
    }
}

/// Points for the longest trailing run in the pile.
///
/// Tries the trailing `n` cards for `n` from the pile length down to 3. The
/// first window whose ranks are distinct and consecutive scores `n`.
#[must_use]
pub fn score_pile_run(pile: &[Card]) -> u8 {
    for n in (3..=pile.len()).rev() {
        let window = &pile[pile.len() - n..];
        let mut seen = [false; 14];
        let mut low = u8::MAX;
        let mut high = 0;
        let mut distinct = true;

        for card in window {
            let rank = card.value();
            if seen[rank as usize] {
                distinct = false;
                break;
            }
            seen[rank as usize] = true;
            low = low.min(rank);
            high = high.max(rank);
        }

        if distinct && usize::from(high - low) + 1 == n {
            return n as u8;
        }
    }
    0
}

/// Scores a pile that already ends with the card just played.
#[must_use]
pub fn score_pile(sum: u8, pile: &[Card]) -> PegScore {
    PegScore {
        fifteen: if sum == 15 { 2 } else { 0 },
        thirty_one: if sum == 31 { 2 } else { 0 },
        pairs: score_pile_pairs(pile),
        run: score_pile_run(pile),
    }
}
