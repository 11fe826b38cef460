//! Round driver: deal, discard, cut, play, and show.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, deal, shuffled_deck};
use crate::error::RoundError;
use crate::hand::{DEALT_SIZE, Hand};
use crate::options::GameOptions;
use crate::player::{Player, Seat};
use crate::result::{GameOutcome, RoundResult};

mod play;
mod show;

/// Cards needed for a round: two hands of six and a cut.
const ROUND_CARDS: usize = DEALT_SIZE * 2 + 1;

/// Points the dealer pegs when the cut is a Jack.
const HIS_HEELS_POINTS: u16 = 2;

/// A cribbage game between two players.
///
/// The game owns the random source, the options and whose deal it is. Players
/// are borrowed per round and their totals are the only scoreboard.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Seat dealing the next round.
    dealer: Seat,
    /// Rounds played so far.
    rounds: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed. The first seat deals first.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions, Seat};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.dealer(), Seat::First);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            dealer: Seat::First,
            rounds: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seat dealing the next round.
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Sets the seat dealing the next round.
    pub const fn set_dealer(&mut self, seat: Seat) {
        self.dealer = seat;
    }

    /// Rounds played so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Cuts for the first deal.
    ///
    /// Each seat draws a card from a fresh shuffle; the lower rank deals. Equal
    /// ranks draw again. Returns the deciding cards by seat.
    pub fn cut_for_deal(&mut self) -> [Card; 2] {
        loop {
            let deck = shuffled_deck(&mut self.rng);
            let [first, second, ..] = *deck.as_slice() else {
                continue;
            };
            if first.rank == second.rank {
                tracing::debug!(target: "cribrs::round", %first, %second, "tied cut, drawing again");
                continue;
            }

            self.dealer = if first.rank < second.rank {
                Seat::First
            } else {
                Seat::Second
            };
            tracing::debug!(target: "cribrs::round", %first, %second, dealer = %self.dealer, "cut for deal");
            return [first, second];
        }
    }

    /// Shuffles a fresh deck and plays one round. The deal then passes.
    ///
    /// `players` is indexed by seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a player cannot discard or proposes an illegal play.
    pub fn play_round(
        &mut self,
        players: &mut [&mut dyn Player; 2],
    ) -> Result<RoundResult, RoundError> {
        let deck = shuffled_deck(&mut self.rng);
        self.play_round_with_deck(players, &deck)
    }

    /// Plays one round from a prepared deck. The deal then passes.
    ///
    /// Cards are dealt alternately from the front, pone first; the next card
    /// after both hands is the cut.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NotEnoughCards`] if `deck` has fewer than 13 cards,
    /// or an error if a player cannot discard or proposes an illegal play.
    pub fn play_round_with_deck(
        &mut self,
        players: &mut [&mut dyn Player; 2],
        deck: &[Card],
    ) -> Result<RoundResult, RoundError> {
        if deck.len() < ROUND_CARDS {
            return Err(RoundError::NotEnoughCards);
        }

        let dealer = self.dealer;
        let pone = dealer.other();
        let (pone_hand, dealer_hand, rest) = deal(deck, DEALT_SIZE);
        let cut = *rest.first().ok_or(RoundError::NotEnoughCards)?;

        players[pone.index()].receive(pone_hand);
        players[dealer.index()].receive(dealer_hand);

        let mut crib = Hand::new();
        let mut kept: [Hand; 2] = [Hand::new(), Hand::new()];
        for seat in [pone, dealer] {
            let option = players[seat.index()]
                .discard(seat == dealer)
                .map_err(|source| RoundError::Discard { seat, source })?;
            let (keep, discard) = option.into_parts();
            for &card in &discard {
                crib.push(card);
            }
            kept[seat.index()] = keep;
        }

        tracing::debug!(target: "cribrs::round", round = self.rounds + 1, %dealer, %cut, %crib, "round dealt");

        let mut result = RoundResult {
            dealer,
            cut,
            crib,
            his_heels: false,
            pegging: Vec::new(),
            pegging_points: [0; 2],
            show: Vec::new(),
            winner: None,
        };

        if self.options.his_heels && cut.rank == Rank::Jack {
            tracing::debug!(target: "cribrs::round", %dealer, "his heels");
            result.his_heels = true;
            self.award(players, dealer, HIS_HEELS_POINTS, &mut result);
        }

        if result.winner.is_none() {
            self.play_pegging(players, kept, &mut result)?;
        }
        if result.winner.is_none() {
            self.count_show(players, &mut result);
        }

        if let Some(winner) = result.winner {
            tracing::info!(
                target: "cribrs::round",
                %winner,
                first = players[0].score(),
                second = players[1].score(),
                "game won"
            );
        }

        self.dealer = pone;
        self.rounds += 1;
        Ok(result)
    }

    /// Plays rounds, alternating the deal, until a player wins.
    ///
    /// # Errors
    ///
    /// Returns the first round error.
    pub fn play_game(
        &mut self,
        players: &mut [&mut dyn Player; 2],
    ) -> Result<GameOutcome, RoundError> {
        loop {
            let result = self.play_round(players)?;
            if let Some(winner) = result.winner {
                let scores = [players[0].score(), players[1].score()];
                let margin = self
                    .options
                    .margin(scores[winner.other().index()]);
                tracing::info!(target: "cribrs::round", %winner, ?margin, rounds = self.rounds, "game over");

                return Ok(GameOutcome {
                    winner,
                    scores,
                    rounds: self.rounds,
                    margin,
                });
            }
        }
    }

    /// Adds points to a seat and records a win if it reached the winning score.
    ///
    /// Returns `true` once the round has a winner.
    fn award(
        &self,
        players: &mut [&mut dyn Player; 2],
        seat: Seat,
        points: u16,
        result: &mut RoundResult,
    ) -> bool {
        if points == 0 || result.winner.is_some() {
            return result.winner.is_some();
        }
        let total = players[seat.index()].add_points(points);
        if total >= self.options.winning_score {
            result.winner = Some(seat);
        }
        result.winner.is_some()
    }
}
