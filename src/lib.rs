//! A cribbage rules engine with optional `no_std` support.
//!
//! The crate scores hands and cribs at the show, picks the best discard from a
//! dealt hand, and runs the play ("pegging"). A [`Game`] drives whole rounds
//! between two [`Player`] implementations.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Hand, Rank, Suit};
//!
//! let hand = Hand::from_cards(&[
//!     Card::new(Rank::Five, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Diamonds),
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Spades),
//! ]);
//! let cut = Card::new(Rank::Five, Suit::Spades);
//! assert_eq!(hand.score(cut, false).total, 29);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod discard;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pegging;
pub mod player;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit, deal, full_deck, shuffled_deck};
pub use discard::{
    DiscardAnalysis, DiscardOption, ScoreRange, analyze_discards, best_discard, optimal_discard,
};
pub use error::{DiscardError, PegError, RoundError};
pub use game::Game;
pub use hand::{DEALT_SIZE, Hand, KEEP_SIZE};
pub use options::{GameOptions, PileLeader};
pub use pegging::{PILE_LIMIT, PegScore, PegState, best_play, legal_plays};
pub use player::{ComputerPlayer, Player, ScriptedPlayer, Seat};
pub use result::{GameOutcome, Margin, PegEvent, RoundResult, ShowCount, ShowKind};
pub use score::{
    ScoreBreakdown, heuristic_discard_score, score_fifteens, score_flush, score_nobs,
    score_pairs, score_runs,
};
