//! Card types and deck utilities.

use core::fmt;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::hand::Hand;

/// Card rank, Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank for a raw value in `1..=13`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Raw value (Ace = 1 .. King = 13), used for runs.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Value capped at 10, used for fifteens and the pegging count.
    #[must_use]
    pub const fn count_value(self) -> u8 {
        if self.value() > 10 { 10 } else { self.value() }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("A"),
            Self::Jack => f.write_str("J"),
            Self::Queen => f.write_str("Q"),
            Self::King => f.write_str("K"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Spades => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        };
        f.write_str(symbol)
    }
}

/// Suit color. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Clubs and spades.
    Black,
    /// Diamonds and hearts.
    Red,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Raw rank value, used for runs.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Value capped at 10, used for sums.
    #[must_use]
    pub const fn count_value(self) -> u8 {
        self.rank.count_value()
    }

    /// Color of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns an ordered 52-card deck, suit by suit from Ace to King.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Returns a fresh deck shuffled with the given random source.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = full_deck();
    cards.shuffle(rng);
    cards
}

/// Deals `count` cards to each of two hands, alternating from the top.
///
/// Returns the two hands and the undealt remainder. If the deck runs short the
/// hands are simply smaller; callers check sizes.
#[must_use]
pub fn deal(deck: &[Card], count: usize) -> (Hand, Hand, Vec<Card>) {
    let mut first = Hand::new();
    let mut second = Hand::new();
    let mut cards = deck.iter().copied();

    for _ in 0..count {
        if let Some(card) = cards.next() {
            first.push(card);
        }
        if let Some(card) = cards.next() {
            second.push(card);
        }
    }

    (first, second, cards.collect())
}
