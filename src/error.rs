//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::player::Seat;

/// Errors that can occur when splitting a dealt hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The dealt hand does not hold exactly 6 cards.
    #[error("not a dealt hand of 6 cards (got {0})")]
    HandSize(usize),
    /// The requested keep size is not 4.
    #[error("a cribbage hand must keep 4 cards (asked for {0})")]
    KeepSize(usize),
    /// The chosen discard positions are out of range or repeated.
    #[error("invalid discard selection")]
    InvalidSelection,
}

/// Errors that can occur during pegging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PegError {
    /// The card would take the count past 31.
    #[error("{card} would take the count from {sum} past 31")]
    ExceedsThirtyOne {
        /// Count before the play.
        sum: u8,
        /// The rejected card.
        card: Card,
    },
    /// The player does not hold the card.
    #[error("{0} is not in the pegging hand")]
    CardNotHeld(Card),
    /// The player said go while holding a card that fits under 31.
    #[error("cannot say go while holding a playable card")]
    MustPlay,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck cannot cover two hands of 6 and a cut.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// A player failed to discard.
    #[error("{seat} could not discard: {source}")]
    Discard {
        /// The offending seat.
        seat: Seat,
        /// What went wrong.
        source: DiscardError,
    },
    /// A player proposed an illegal pegging play.
    #[error("illegal pegging play by {seat}: {source}")]
    IllegalPlay {
        /// The offending seat.
        seat: Seat,
        /// What went wrong.
        source: PegError,
    },
}
