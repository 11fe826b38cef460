//! The play phase of a round, driven against both players.

use crate::error::{PegError, RoundError};
use crate::hand::Hand;
use crate::options::PileLeader;
use crate::pegging::{PegState, legal_plays};
use crate::player::{Player, Seat};
use crate::result::{PegEvent, RoundResult};

use super::Game;

/// Points for the last card of a pile that did not reach 31.
const LAST_CARD_POINTS: u16 = 1;

/// The play is over once both players report an empty pegging hand, or once
/// neither seat has an unplayed kept card left.
fn hands_exhausted(players: &[&mut dyn Player; 2], kept: &[Hand; 2]) -> bool {
    players.iter().all(|p| p.has_empty_pegging_hand()) || kept.iter().all(Hand::is_empty)
}

impl Game {
    /// Runs the play until both pegging hands are empty or someone wins.
    ///
    /// `kept` holds each seat's four kept cards; a played card must come from
    /// it, and a seat may only say go when none of its remaining cards fit.
    pub(super) fn play_pegging(
        &self,
        players: &mut [&mut dyn Player; 2],
        mut kept: [Hand; 2],
        result: &mut RoundResult,
    ) -> Result<(), RoundError> {
        let mut state = PegState::new(result.dealer.other());

        while !hands_exhausted(players, &kept) {
            let seat = state.turn();
            if state.has_passed(seat) {
                state.advance_turn();
                continue;
            }

            match players[seat.index()].play_peg_card(&state) {
                None => {
                    if !legal_plays(&state, kept[seat.index()].cards()).is_empty() {
                        return Err(RoundError::IllegalPlay {
                            seat,
                            source: PegError::MustPlay,
                        });
                    }
                    tracing::trace!(target: "cribrs::pegging", %seat, sum = state.sum(), "go");
                    state.pass();
                    result.pegging.push(PegEvent::Go { seat });
                }
                Some(card) => {
                    if !kept[seat.index()].remove(card) {
                        return Err(RoundError::IllegalPlay {
                            seat,
                            source: PegError::CardNotHeld(card),
                        });
                    }
                    let score = state
                        .play(card)
                        .map_err(|source| RoundError::IllegalPlay { seat, source })?;

                    tracing::debug!(
                        target: "cribrs::pegging",
                        %seat,
                        %card,
                        sum = state.sum(),
                        points = score.total(),
                        "play"
                    );
                    result.pegging.push(PegEvent::Play {
                        seat,
                        card,
                        sum: state.sum(),
                        score,
                    });
                    if self.peg(players, seat, u16::from(score.total()), result) {
                        return Ok(());
                    }
                }
            }

            if !state.should_reset() {
                state.advance_turn();
                continue;
            }

            if let Some(last) = state.last_card_bonus() {
                tracing::debug!(target: "cribrs::pegging", seat = %last, "last card");
                result.pegging.push(PegEvent::LastCard { seat: last });
                if self.peg(players, last, LAST_CARD_POINTS, result) {
                    return Ok(());
                }
            }

            state.reset();
            result.pegging.push(PegEvent::Reset {
                pile_num: state.pile_num(),
            });
            if self.options.pile_leader == PileLeader::Opponent {
                state.advance_turn();
            }
        }

        if let Some(last) = state.last_card_bonus() {
            tracing::debug!(target: "cribrs::pegging", seat = %last, "last card of the play");
            result.pegging.push(PegEvent::LastCard { seat: last });
            self.peg(players, last, LAST_CARD_POINTS, result);
        }

        Ok(())
    }

    fn peg(
        &self,
        players: &mut [&mut dyn Player; 2],
        seat: Seat,
        points: u16,
        result: &mut RoundResult,
    ) -> bool {
        result.pegging_points[seat.index()] += points;
        self.award(players, seat, points, result)
    }
}
