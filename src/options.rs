//! Game configuration options.

use crate::result::Margin;

/// Who leads the next pile after a pile resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum PileLeader {
    /// The player who laid the last card of the old pile leads again.
    #[default]
    LastPlayer,
    /// The opponent of the player who laid the last card leads.
    Opponent,
}

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::{GameOptions, PileLeader};
///
/// let options = GameOptions::default()
///     .with_winning_score(61)
///     .with_his_heels(false)
///     .with_pile_leader(PileLeader::Opponent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Total that wins the game.
    pub winning_score: u16,
    /// Whether the dealer pegs 2 when the cut is a Jack.
    pub his_heels: bool,
    /// Who leads after a pile resets.
    pub pile_leader: PileLeader,
    /// A loser below this total is skunked.
    pub skunk_line: u16,
    /// A loser below this total is double skunked.
    pub double_skunk_line: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: 121,
            his_heels: true,
            pile_leader: PileLeader::LastPlayer,
            skunk_line: 91,
            double_skunk_line: 61,
        }
    }
}

impl GameOptions {
    /// Sets the winning total.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u16) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets whether a Jack cut scores 2 for the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_his_heels(false);
    /// assert!(!options.his_heels);
    /// ```
    #[must_use]
    pub const fn with_his_heels(mut self, enabled: bool) -> Self {
        self.his_heels = enabled;
        self
    }

    /// Sets who leads after a pile resets.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{GameOptions, PileLeader};
    ///
    /// let options = GameOptions::default().with_pile_leader(PileLeader::Opponent);
    /// assert_eq!(options.pile_leader, PileLeader::Opponent);
    /// ```
    #[must_use]
    pub const fn with_pile_leader(mut self, leader: PileLeader) -> Self {
        self.pile_leader = leader;
        self
    }

    /// Sets the skunk lines.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_skunk_lines(90, 60);
    /// assert_eq!(options.skunk_line, 90);
    /// assert_eq!(options.double_skunk_line, 60);
    /// ```
    #[must_use]
    pub const fn with_skunk_lines(mut self, skunk: u16, double_skunk: u16) -> Self {
        self.skunk_line = skunk;
        self.double_skunk_line = double_skunk;
        self
    }

    /// Classifies a finished game by the loser's total.
    ///
    /// ```
    /// use cribrs::{GameOptions, Margin};
    ///
    /// let options = GameOptions::default();
    /// assert_eq!(options.margin(95), Margin::Win);
    /// assert_eq!(options.margin(90), Margin::Skunk);
    /// assert_eq!(options.margin(60), Margin::DoubleSkunk);
    /// ```
    #[must_use]
    pub const fn margin(&self, loser_score: u16) -> Margin {
        if loser_score < self.double_skunk_line {
            Margin::DoubleSkunk
        } else if loser_score < self.skunk_line {
            Margin::Skunk
        } else {
            Margin::Win
        }
    }
}
