//! Seats and the player capability used by the round driver.

use core::fmt;

use alloc::string::{String, ToString};

use crate::card::Card;
use crate::discard::{DiscardOption, best_discard};
use crate::error::DiscardError;
use crate::hand::{DEALT_SIZE, Hand, KEEP_SIZE};
use crate::pegging::{PegState, best_play};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first seat.
    First,
    /// The second seat.
    Second,
}

impl Seat {
    /// Both seats in order.
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// Index of the seat (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The opposite seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first seat"),
            Self::Second => f.write_str("second seat"),
        }
    }
}

/// What the round driver needs from a player, human or automated.
///
/// The driver never asks which kind of player it is talking to.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Replaces the player's hand with a freshly dealt one.
    fn receive(&mut self, hand: Hand);

    /// The player's current hand (6 cards before discarding, 4 after).
    fn hand(&self) -> &Hand;

    /// Chooses two cards for the crib.
    ///
    /// Afterwards the player's hand is the 4 kept cards and its pegging hand is
    /// a separate copy of them.
    ///
    /// # Errors
    ///
    /// Returns an error if the current hand cannot be split.
    fn discard(&mut self, is_dealer: bool) -> Result<DiscardOption, DiscardError>;

    /// Plays a card from the pegging hand, or returns `None` to say go.
    ///
    /// A returned card must be legal for `state` and is removed from the
    /// pegging hand.
    fn play_peg_card(&mut self, state: &PegState) -> Option<Card>;

    /// Whether every pegging card has been played.
    fn has_empty_pegging_hand(&self) -> bool;

    /// Adds points and returns the new total.
    fn add_points(&mut self, points: u16) -> u16;

    /// Current total.
    fn score(&self) -> u16;
}

/// Player that discards with the optimizer and pegs greedily.
#[derive(Debug, Clone, Default)]
pub struct ComputerPlayer {
    name: String,
    hand: Hand,
    peg_hand: Hand,
    points: u16,
}

impl ComputerPlayer {
    /// Creates a computer player with no cards and no points.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Cards not yet played this pegging phase.
    #[must_use]
    pub const fn peg_hand(&self) -> &Hand {
        &self.peg_hand
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, hand: Hand) {
        self.hand = hand;
        self.peg_hand = Hand::new();
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn discard(&mut self, is_dealer: bool) -> Result<DiscardOption, DiscardError> {
        let option = best_discard(&self.hand, is_dealer)?;
        self.hand = option.keep().clone();
        self.peg_hand = option.keep().clone();
        Ok(option)
    }

    fn play_peg_card(&mut self, state: &PegState) -> Option<Card> {
        let card = best_play(state, self.peg_hand.cards())?;
        self.peg_hand.remove(card);
        Some(card)
    }

    fn has_empty_pegging_hand(&self) -> bool {
        self.peg_hand.is_empty()
    }

    fn add_points(&mut self, points: u16) -> u16 {
        self.points = self.points.saturating_add(points);
        self.points
    }

    fn score(&self) -> u16 {
        self.points
    }
}

/// Player whose choices are fixed up front.
///
/// It discards the cards at the configured positions of its dealt hand and
/// pegs the first legal card in hand order. Useful for replaying a known line
/// of play or standing in for an interactive player.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    discard_at: [usize; 2],
    hand: Hand,
    peg_hand: Hand,
    points: u16,
}

impl ScriptedPlayer {
    /// Creates a scripted player that discards the last two dealt cards.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            discard_at: [DEALT_SIZE - 2, DEALT_SIZE - 1],
            hand: Hand::new(),
            peg_hand: Hand::new(),
            points: 0,
        }
    }

    /// Sets the dealt-hand positions to discard.
    #[must_use]
    pub const fn with_discard(mut self, positions: [usize; 2]) -> Self {
        self.discard_at = positions;
        self
    }

    /// Cards not yet played this pegging phase.
    #[must_use]
    pub const fn peg_hand(&self) -> &Hand {
        &self.peg_hand
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, hand: Hand) {
        self.hand = hand;
        self.peg_hand = Hand::new();
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn discard(&mut self, _is_dealer: bool) -> Result<DiscardOption, DiscardError> {
        if self.hand.len() != DEALT_SIZE {
            return Err(DiscardError::HandSize(self.hand.len()));
        }
        let [a, b] = self.discard_at;
        let (a, b) = (a.min(b), a.max(b));
        if a == b || b >= DEALT_SIZE {
            return Err(DiscardError::InvalidSelection);
        }

        let cards = self.hand.cards();
        let discard = Hand::from_cards(&[cards[a], cards[b]]);
        let option = self
            .hand
            .split(KEEP_SIZE)?
            .into_iter()
            .find(|option| option.discard() == &discard)
            .ok_or(DiscardError::InvalidSelection)?;

        self.hand = option.keep().clone();
        self.peg_hand = option.keep().clone();
        Ok(option)
    }

    fn play_peg_card(&mut self, state: &PegState) -> Option<Card> {
        let card = self
            .peg_hand
            .iter()
            .copied()
            .find(|&c| state.can_play(c))?;
        self.peg_hand.remove(card);
        Some(card)
    }

    fn has_empty_pegging_hand(&self) -> bool {
        self.peg_hand.is_empty()
    }

    fn add_points(&mut self, points: u16) -> u16 {
        self.points = self.points.saturating_add(points);
        self.points
    }

    fn score(&self) -> u16 {
        self.points
    }
}
