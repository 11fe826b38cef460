//! Ordered card collections and the 6-to-4 split.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::discard::DiscardOption;
use crate::error::DiscardError;

/// Cards dealt to each player per round.
pub const DEALT_SIZE: usize = 6;

/// Cards kept after discarding to the crib.
pub const KEEP_SIZE: usize = 4;

/// An ordered collection of cards.
///
/// Order matters only for display and for the pegging pile, where pairs and
/// runs are read from the trailing cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from the given cards, keeping their order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Appends a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card`. Returns whether one was found.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|c| *c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns every `k`-card sub-hand, each an independent copy.
    ///
    /// Sub-hands preserve the relative order of the source and are produced
    /// in lexicographic index order. Yields `C(n, k)` hands; `k > n` yields none.
    #[must_use]
    pub fn combinations(&self, k: usize) -> Vec<Self> {
        let mut result = Vec::new();
        if k > self.cards.len() {
            return result;
        }
        let mut current = Vec::with_capacity(k);
        self.collect_combinations(0, k, &mut current, &mut result);
        result
    }

    fn collect_combinations(
        &self,
        start: usize,
        k: usize,
        current: &mut Vec<Card>,
        out: &mut Vec<Self>,
    ) {
        if current.len() == k {
            out.push(Self::from_cards(current));
            return;
        }
        let needed = k - current.len();
        for index in start..=self.cards.len() - needed {
            current.push(self.cards[index]);
            self.collect_combinations(index + 1, k, current, out);
            current.pop();
        }
    }

    /// Multiset difference: the cards of `self` left after removing one
    /// occurrence of each card in `subset`. Order of `self` is kept.
    #[must_use]
    pub fn difference(&self, subset: &[Card]) -> Self {
        let mut pending = subset.to_vec();
        let mut cards = Vec::with_capacity(self.cards.len().saturating_sub(subset.len()));
        for &card in &self.cards {
            if let Some(index) = pending.iter().position(|c| *c == card) {
                pending.swap_remove(index);
            } else {
                cards.push(card);
            }
        }
        Self { cards }
    }

    /// Enumerates every keep/discard split of a dealt hand.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::HandSize`] unless the hand holds exactly 6 cards,
    /// and [`DiscardError::KeepSize`] unless `keep` is 4.
    pub fn split(&self, keep: usize) -> Result<Vec<DiscardOption>, DiscardError> {
        if self.cards.len() != DEALT_SIZE {
            return Err(DiscardError::HandSize(self.cards.len()));
        }
        if keep != KEEP_SIZE {
            return Err(DiscardError::KeepSize(keep));
        }

        Ok(self
            .combinations(keep)
            .into_iter()
            .map(|kept| {
                let discard = self.difference(kept.cards());
                DiscardOption::new(kept, discard)
            })
            .collect())
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
