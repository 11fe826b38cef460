//! The play ("pegging"): running count, pile history, and go handling.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PegError;
use crate::player::Seat;

mod scoring;
mod selector;

pub use scoring::{
    PegScore, score_pile, score_pile_pairs, score_pile_run, trailing_multiple,
};
pub use selector::{best_play, legal_plays};

/// Highest count a pile may reach.
pub const PILE_LIMIT: u8 = 31;

/// State of the pegging phase for one round.
///
/// The state is created when the play begins with the pone to act, is mutated
/// by [`PegState::play`], [`PegState::pass`] and [`PegState::reset`], and is
/// dropped when both pegging hands are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegState {
    sum: u8,
    turn: Seat,
    last_player: Option<Seat>,
    pile: Vec<Card>,
    passed: [bool; 2],
    pile_num: u8,
}

impl PegState {
    /// Starts a play phase with `leader` (the pone) to act.
    #[must_use]
    pub const fn new(leader: Seat) -> Self {
        Self {
            sum: 0,
            turn: leader,
            last_player: None,
            pile: Vec::new(),
            passed: [false; 2],
            pile_num: 0,
        }
    }

    /// Current count of the pile.
    #[must_use]
    pub const fn sum(&self) -> u8 {
        self.sum
    }

    /// Seat that acts next.
    #[must_use]
    pub const fn turn(&self) -> Seat {
        self.turn
    }

    /// Seat that most recently played a card, if any.
    #[must_use]
    pub const fn last_player(&self) -> Option<Seat> {
        self.last_player
    }

    /// Cards played since the last reset, oldest first.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Whether `seat` has said "go" on this pile.
    #[must_use]
    pub const fn has_passed(&self, seat: Seat) -> bool {
        self.passed[seat.index()]
    }

    /// Number of resets so far (piles completed).
    #[must_use]
    pub const fn pile_num(&self) -> u8 {
        self.pile_num
    }

    /// Whether `card` fits under the 31 limit.
    #[must_use]
    pub const fn can_play(&self, card: Card) -> bool {
        self.sum + card.count_value() <= PILE_LIMIT
    }

    /// Points `card` would score if played now. The state is not changed.
    #[must_use]
    pub fn score_play(&self, card: Card) -> PegScore {
        let mut next = self.clone();
        next.push(card);
        score_pile(next.sum, &next.pile)
    }

    fn push(&mut self, card: Card) {
        self.sum += card.count_value();
        self.pile.push(card);
        self.last_player = Some(self.turn);
    }

    /// Plays `card` for the seat whose turn it is and returns what it scored.
    ///
    /// The turn does not advance; see [`PegState::advance_turn`].
    ///
    /// # Errors
    ///
    /// Returns [`PegError::ExceedsThirtyOne`] if the card would push the count
    /// past 31. The state is left unchanged.
    pub fn play(&mut self, card: Card) -> Result<PegScore, PegError> {
        if !self.can_play(card) {
            return Err(PegError::ExceedsThirtyOne {
                sum: self.sum,
                card,
            });
        }
        self.push(card);
        Ok(score_pile(self.sum, &self.pile))
    }

    /// Records a "go" for the seat whose turn it is.
    pub const fn pass(&mut self) {
        self.passed[self.turn.index()] = true;
    }

    /// Hands the turn to the other seat.
    pub const fn advance_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// Sets the seat to act next.
    pub const fn set_turn(&mut self, seat: Seat) {
        self.turn = seat;
    }

    /// Whether the pile is finished: the count hit 31 or both seats said go.
    #[must_use]
    pub const fn should_reset(&self) -> bool {
        self.sum == PILE_LIMIT || (self.passed[0] && self.passed[1])
    }

    /// Seat owed the 1-point "last card" bonus if the pile closed now.
    ///
    /// Nothing is owed on an empty pile or at 31, which already scored 2.
    #[must_use]
    pub const fn last_card_bonus(&self) -> Option<Seat> {
        if self.sum == 0 || self.sum == PILE_LIMIT {
            None
        } else {
            self.last_player
        }
    }

    /// Clears the pile for the next one, handing the lead to the last player.
    pub fn reset(&mut self) {
        self.sum = 0;
        self.pile.clear();
        self.passed = [false; 2];
        self.pile_num += 1;
        if let Some(seat) = self.last_player {
            self.turn = seat;
        }
    }
}
