//! Game integration tests.

use cribrs::{
    Card, ComputerPlayer, DiscardError, DiscardOption, Game, GameOptions, Hand, Margin, PegError,
    PegEvent, PegScore, PegState, PileLeader, Player, Rank, RoundError, ScriptedPlayer, Seat,
    ShowKind, Suit, full_deck,
};

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(Rank::from_value(rank).unwrap(), suit)
}

/// Interleaves two dealt hands pone-first and appends the cut.
fn stacked_deck(pone: &[Card; 6], dealer: &[Card; 6], cut: Card) -> Vec<Card> {
    let mut deck = Vec::with_capacity(13);
    for (p, d) in pone.iter().zip(dealer) {
        deck.push(*p);
        deck.push(*d);
    }
    deck.push(cut);
    deck
}

fn sample_deck() -> Vec<Card> {
    stacked_deck(
        &[
            card(10, Suit::Clubs),
            card(5, Suit::Hearts),
            card(7, Suit::Diamonds),
            card(8, Suit::Spades),
            card(13, Suit::Clubs),
            card(12, Suit::Clubs),
        ],
        &[
            card(5, Suit::Clubs),
            card(6, Suit::Diamonds),
            card(9, Suit::Hearts),
            card(2, Suit::Spades),
            card(3, Suit::Diamonds),
            card(4, Suit::Diamonds),
        ],
        card(1, Suit::Spades),
    )
}

const fn play(seat: Seat, card: Card, sum: u8, score: PegScore) -> PegEvent {
    PegEvent::Play {
        seat,
        card,
        sum,
        score,
    }
}

const fn peg(fifteen: u8, thirty_one: u8, pairs: u8, run: u8) -> PegScore {
    PegScore {
        fifteen,
        thirty_one,
        pairs,
        run,
    }
}

/// Plays the first card of its pegging hand whether or not it fits.
struct RecklessPlayer {
    inner: ScriptedPlayer,
    peg_hand: Vec<Card>,
}

impl Player for RecklessPlayer {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn receive(&mut self, hand: Hand) {
        self.inner.receive(hand);
    }

    fn hand(&self) -> &Hand {
        self.inner.hand()
    }

    fn discard(&mut self, is_dealer: bool) -> Result<DiscardOption, DiscardError> {
        let option = self.inner.discard(is_dealer)?;
        self.peg_hand = option.keep().cards().to_vec();
        Ok(option)
    }

    fn play_peg_card(&mut self, _state: &PegState) -> Option<Card> {
        if self.peg_hand.is_empty() {
            None
        } else {
            Some(self.peg_hand.remove(0))
        }
    }

    fn has_empty_pegging_hand(&self) -> bool {
        self.peg_hand.is_empty()
    }

    fn add_points(&mut self, points: u16) -> u16 {
        self.inner.add_points(points)
    }

    fn score(&self) -> u16 {
        self.inner.score()
    }
}

/// Discards like a scripted player but says go on every turn.
struct SilentPlayer {
    inner: ScriptedPlayer,
}

impl Player for SilentPlayer {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn receive(&mut self, hand: Hand) {
        self.inner.receive(hand);
    }

    fn hand(&self) -> &Hand {
        self.inner.hand()
    }

    fn discard(&mut self, is_dealer: bool) -> Result<DiscardOption, DiscardError> {
        self.inner.discard(is_dealer)
    }

    fn play_peg_card(&mut self, _state: &PegState) -> Option<Card> {
        None
    }

    fn has_empty_pegging_hand(&self) -> bool {
        self.inner.peg_hand().is_empty()
    }

    fn add_points(&mut self, points: u16) -> u16 {
        self.inner.add_points(points)
    }

    fn score(&self) -> u16 {
        self.inner.score()
    }
}

#[test]
fn scripted_round_plays_out() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second");

    let result = {
        let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];
        game.play_round_with_deck(&mut players, &sample_deck())
            .unwrap()
    };

    assert_eq!(result.dealer, Seat::First);
    assert_eq!(result.cut, card(1, Suit::Spades));
    assert!(!result.his_heels);
    assert_eq!(
        result.crib.cards(),
        &[
            card(13, Suit::Clubs),
            card(12, Suit::Clubs),
            card(3, Suit::Diamonds),
            card(4, Suit::Diamonds),
        ]
    );

    let none = peg(0, 0, 0, 0);
    assert_eq!(
        result.pegging,
        vec![
            play(Seat::Second, card(10, Suit::Clubs), 10, none),
            play(Seat::First, card(5, Suit::Clubs), 15, peg(2, 0, 0, 0)),
            play(Seat::Second, card(5, Suit::Hearts), 20, peg(0, 0, 2, 0)),
            play(Seat::First, card(6, Suit::Diamonds), 26, none),
            PegEvent::Go { seat: Seat::Second },
            play(Seat::First, card(2, Suit::Spades), 28, none),
            PegEvent::Go { seat: Seat::First },
            PegEvent::LastCard { seat: Seat::First },
            PegEvent::Reset { pile_num: 1 },
            play(Seat::First, card(9, Suit::Hearts), 9, none),
            play(Seat::Second, card(7, Suit::Diamonds), 16, none),
            PegEvent::Go { seat: Seat::First },
            play(Seat::Second, card(8, Suit::Spades), 24, peg(0, 0, 0, 3)),
            PegEvent::LastCard { seat: Seat::Second },
        ]
    );
    assert_eq!(result.pegging_points, [3, 6]);

    let show: Vec<(Seat, ShowKind, u16)> = result
        .show
        .iter()
        .map(|count| (count.seat, count.kind, count.breakdown.total))
        .collect();
    assert_eq!(
        show,
        vec![
            (Seat::Second, ShowKind::Hand, 4),
            (Seat::First, ShowKind::Hand, 4),
            (Seat::First, ShowKind::Crib, 4),
        ]
    );
    assert_eq!(result.winner, None);

    assert_eq!(first.score(), 11);
    assert_eq!(second.score(), 10);
    assert_eq!(game.dealer(), Seat::Second);
    assert_eq!(game.rounds(), 1);
}

#[test]
fn opponent_leads_after_reset_when_configured() {
    let options = GameOptions::default().with_pile_leader(PileLeader::Opponent);
    let mut game = Game::new(options, 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second");
    let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];

    let result = game
        .play_round_with_deck(&mut players, &sample_deck())
        .unwrap();

    let after_reset: Vec<PegEvent> = result
        .pegging
        .iter()
        .skip_while(|e| !matches!(e, PegEvent::Reset { .. }))
        .skip(1)
        .copied()
        .collect();
    assert_eq!(
        after_reset,
        vec![
            play(Seat::Second, card(7, Suit::Diamonds), 7, peg(0, 0, 0, 0)),
            play(Seat::First, card(9, Suit::Hearts), 16, peg(0, 0, 0, 0)),
            play(Seat::Second, card(8, Suit::Spades), 24, peg(0, 0, 0, 3)),
            PegEvent::LastCard { seat: Seat::Second },
        ]
    );
    assert_eq!(result.pegging_points, [3, 6]);
}

#[test]
fn round_stops_when_a_player_wins() {
    let options = GameOptions::default().with_winning_score(3);
    let mut game = Game::new(options, 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second");

    let result = {
        let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];
        game.play_round_with_deck(&mut players, &sample_deck())
            .unwrap()
    };

    assert_eq!(result.winner, Some(Seat::First));
    assert_eq!(result.pegging.last(), Some(&PegEvent::LastCard { seat: Seat::First }));
    assert!(result.show.is_empty());
    assert_eq!(first.score(), 3);
    assert_eq!(second.score(), 2);
}

#[test]
fn jack_cut_pegs_his_heels() {
    let mut deck = sample_deck();
    *deck.last_mut().unwrap() = card(11, Suit::Spades);

    let mut game = Game::new(GameOptions::default().with_winning_score(2), 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second");
    let result = {
        let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];
        game.play_round_with_deck(&mut players, &deck).unwrap()
    };

    assert!(result.his_heels);
    assert_eq!(result.winner, Some(Seat::First));
    assert!(result.pegging.is_empty());
    assert_eq!(first.score(), 2);

    let mut game = Game::new(GameOptions::default().with_his_heels(false), 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second");
    let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];
    let result = game.play_round_with_deck(&mut players, &deck).unwrap();
    assert!(!result.his_heels);
}

#[test]
fn short_deck_is_rejected() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second");
    let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];

    let deck = sample_deck();
    assert_eq!(
        game.play_round_with_deck(&mut players, &deck[..12])
            .unwrap_err(),
        RoundError::NotEnoughCards
    );
}

#[test]
fn bad_discard_selection_is_reported() {
    let mut game = Game::new(GameOptions::default(), 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second").with_discard([2, 2]);
    let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];

    assert_eq!(
        game.play_round_with_deck(&mut players, &sample_deck())
            .unwrap_err(),
        RoundError::Discard {
            seat: Seat::Second,
            source: DiscardError::InvalidSelection,
        }
    );
}

#[test]
fn scripted_discard_positions_are_honored() {
    let mut player = ScriptedPlayer::new("p").with_discard([5, 0]);
    let dealt: Vec<Card> = full_deck().into_iter().take(6).collect();
    player.receive(Hand::from_cards(&dealt));

    let option = player.discard(false).unwrap();
    assert_eq!(option.discard().cards(), &[dealt[0], dealt[5]]);
    assert_eq!(player.hand().cards(), &dealt[1..5]);
    assert_eq!(player.peg_hand(), player.hand());
}

#[test]
fn illegal_play_is_rejected() {
    let tens = |suit| {
        [
            card(10, suit),
            card(11, suit),
            card(12, suit),
            card(13, suit),
            card(1, suit),
            card(2, suit),
        ]
    };
    let deck = stacked_deck(&tens(Suit::Hearts), &tens(Suit::Spades), card(3, Suit::Clubs));

    let mut game = Game::new(GameOptions::default(), 1);
    let mut first = RecklessPlayer {
        inner: ScriptedPlayer::new("first"),
        peg_hand: Vec::new(),
    };
    let mut second = ScriptedPlayer::new("second");
    let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];

    // Second leads 10, first pairs it, second makes 30 with J, first plays J anyway.
    assert_eq!(
        game.play_round_with_deck(&mut players, &deck).unwrap_err(),
        RoundError::IllegalPlay {
            seat: Seat::First,
            source: PegError::ExceedsThirtyOne {
                sum: 30,
                card: card(11, Suit::Spades),
            },
        }
    );
}

#[test]
fn computer_round_accounts_for_every_point() {
    let mut game = Game::new(GameOptions::default(), 2024);
    let mut first = ComputerPlayer::new("first");
    let mut second = ComputerPlayer::new("second");

    let result = {
        let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];
        game.play_round(&mut players).unwrap()
    };

    assert_eq!(result.crib.len(), 4);
    assert!(first.peg_hand().is_empty());
    assert!(second.peg_hand().is_empty());
    assert_eq!(first.hand().len(), 4);

    let plays = result
        .pegging
        .iter()
        .filter(|e| matches!(e, PegEvent::Play { .. }))
        .count();
    assert_eq!(plays, 8);

    let mut totals = result.pegging_points;
    if result.his_heels {
        totals[result.dealer.index()] += 2;
    }
    for count in &result.show {
        totals[count.seat.index()] += count.breakdown.total;
    }
    assert_eq!(totals, [first.score(), second.score()]);
}

#[test]
fn cut_for_deal_gives_the_deal_to_the_lower_card() {
    let mut game = Game::new(GameOptions::default(), 99);
    let [first, second] = game.cut_for_deal();

    assert_ne!(first.rank, second.rank);
    let expected = if first.rank < second.rank {
        Seat::First
    } else {
        Seat::Second
    };
    assert_eq!(game.dealer(), expected);
}

#[test]
fn full_game_is_deterministic_for_a_seed() {
    let run = |seed| {
        let mut game = Game::new(GameOptions::default(), seed);
        let mut first = ComputerPlayer::new("first");
        let mut second = ComputerPlayer::new("second");
        let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];
        game.cut_for_deal();
        game.play_game(&mut players).unwrap()
    };

    let outcome = run(5);
    assert_eq!(outcome, run(5));

    let winner = outcome.scores[outcome.winner.index()];
    let loser = outcome.scores[outcome.winner.other().index()];
    assert!(winner >= 121);
    assert!(loser < 121);
    assert!(outcome.rounds > 0);

    let expected_margin = if loser < 61 {
        Margin::DoubleSkunk
    } else if loser < 91 {
        Margin::Skunk
    } else {
        Margin::Win
    };
    assert_eq!(outcome.margin, expected_margin);
}

#[test]
fn go_with_a_playable_card_is_rejected() {
    let deck: Vec<Card> = full_deck().into_iter().take(13).collect();

    let mut game = Game::new(GameOptions::default(), 1);
    let mut first = SilentPlayer {
        inner: ScriptedPlayer::new("first"),
    };
    let mut second = SilentPlayer {
        inner: ScriptedPlayer::new("second"),
    };
    let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];

    assert_eq!(
        game.play_round_with_deck(&mut players, &deck).unwrap_err(),
        RoundError::IllegalPlay {
            seat: Seat::Second,
            source: PegError::MustPlay,
        }
    );
}

#[test]
fn thirty_one_resets_and_the_last_player_leads() {
    let deck = stacked_deck(
        &[
            card(10, Suit::Clubs),
            card(5, Suit::Clubs),
            card(10, Suit::Diamonds),
            card(6, Suit::Clubs),
            card(2, Suit::Hearts),
            card(3, Suit::Hearts),
        ],
        &[
            card(13, Suit::Spades),
            card(6, Suit::Diamonds),
            card(9, Suit::Spades),
            card(2, Suit::Spades),
            card(7, Suit::Hearts),
            card(8, Suit::Hearts),
        ],
        card(1, Suit::Diamonds),
    );

    let mut game = Game::new(GameOptions::default(), 1);
    let mut first = ScriptedPlayer::new("first");
    let mut second = ScriptedPlayer::new("second");
    let mut players: [&mut dyn Player; 2] = [&mut first, &mut second];
    let result = game.play_round_with_deck(&mut players, &deck).unwrap();

    let none = peg(0, 0, 0, 0);
    assert_eq!(
        result.pegging,
        vec![
            play(Seat::Second, card(10, Suit::Clubs), 10, none),
            play(Seat::First, card(13, Suit::Spades), 20, none),
            play(Seat::Second, card(5, Suit::Clubs), 25, none),
            play(Seat::First, card(6, Suit::Diamonds), 31, peg(0, 2, 0, 0)),
            PegEvent::Reset { pile_num: 1 },
            play(Seat::First, card(9, Suit::Spades), 9, none),
            play(Seat::Second, card(10, Suit::Diamonds), 19, none),
            play(Seat::First, card(2, Suit::Spades), 21, none),
            play(Seat::Second, card(6, Suit::Clubs), 27, none),
            PegEvent::LastCard { seat: Seat::Second },
        ]
    );
    assert_eq!(result.pegging_points, [2, 1]);
}
