//! Counting hands and crib at the show.

use crate::player::Player;
use crate::result::{RoundResult, ShowCount, ShowKind};

use super::Game;

impl Game {
    /// Counts pone's hand, the dealer's hand, then the crib, stopping at a win.
    pub(super) fn count_show(&self, players: &mut [&mut dyn Player; 2], result: &mut RoundResult) {
        let dealer = result.dealer;
        let pone = dealer.other();
        let counts = [
            (pone, ShowKind::Hand, players[pone.index()].hand().clone()),
            (dealer, ShowKind::Hand, players[dealer.index()].hand().clone()),
            (dealer, ShowKind::Crib, result.crib.clone()),
        ];

        for (seat, kind, cards) in counts {
            let breakdown = cards.score(result.cut, kind == ShowKind::Crib);
            tracing::debug!(
                target: "cribrs::round",
                %seat,
                ?kind,
                %cards,
                points = breakdown.total,
                "show"
            );
            result.show.push(ShowCount {
                seat,
                kind,
                cards,
                breakdown,
            });
            if self.award(players, seat, breakdown.total, result) {
                return;
            }
        }
    }
}
