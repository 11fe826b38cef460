//! Round and game result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::pegging::PegScore;
use crate::player::Seat;
use crate::score::ScoreBreakdown;

/// Something that happened during the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PegEvent {
    /// A card was laid on the pile.
    Play {
        /// Who played.
        seat: Seat,
        /// The card played.
        card: Card,
        /// Count after the play.
        sum: u8,
        /// What the play scored.
        score: PegScore,
    },
    /// A player could not play and said go.
    Go {
        /// Who passed.
        seat: Seat,
    },
    /// The last card of a pile scored 1.
    LastCard {
        /// Who scored.
        seat: Seat,
    },
    /// The pile was cleared and a new count begins.
    Reset {
        /// Piles completed so far.
        pile_num: u8,
    },
}

/// Which set of cards was counted at the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowKind {
    /// A player's own hand.
    Hand,
    /// The dealer's crib.
    Crib,
}

/// One count at the show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCount {
    /// Who scored the count.
    pub seat: Seat,
    /// Hand or crib.
    pub kind: ShowKind,
    /// The four cards counted (the cut is not included).
    pub cards: Hand,
    /// Points by category.
    pub breakdown: ScoreBreakdown,
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The dealer this round.
    pub dealer: Seat,
    /// The cut card.
    pub cut: Card,
    /// The crib assembled from both discards.
    pub crib: Hand,
    /// Whether the dealer pegged 2 for a Jack cut.
    pub his_heels: bool,
    /// Everything that happened during the play, in order.
    pub pegging: Vec<PegEvent>,
    /// Points pegged by each seat during the play.
    pub pegging_points: [u16; 2],
    /// Counts made at the show, in order: pone, dealer, crib.
    ///
    /// Shorter when the game was won before the show finished.
    pub show: Vec<ShowCount>,
    /// The winner, if a player reached the winning score this round.
    pub winner: Option<Seat>,
}

/// How decisively a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Margin {
    /// An ordinary win.
    Win,
    /// The loser finished below the skunk line.
    Skunk,
    /// The loser finished below the double skunk line.
    DoubleSkunk,
}

/// Result of a complete game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// The winning seat.
    pub winner: Seat,
    /// Final totals by seat.
    pub scores: [u16; 2],
    /// Rounds played.
    pub rounds: u32,
    /// How decisive the win was.
    pub margin: Margin,
}
