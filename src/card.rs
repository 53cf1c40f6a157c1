//! Card identity: ranks, suits, and cards.

use alloc::string::String;
use core::fmt;

const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

const SUIT_NAMES: [&str; 4] = ["Spades", "Hearts", "Diamonds", "Clubs"];

const UNKNOWN: &str = "Unknown";

/// Card rank.
///
/// Backed by a raw integer: 1 = Ace through 13 = King. Values outside 1..=13
/// are accepted and display as `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank(pub u8);

impl Rank {
    /// Ace.
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack.
    pub const JACK: Self = Self(11);
    /// Queen.
    pub const QUEEN: Self = Self(12);
    /// King.
    pub const KING: Self = Self(13);

    /// All defined ranks in enumeration order (Ace through King).
    pub const ALL: [Self; 13] = [
        Self::ACE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::TEN,
        Self::JACK,
        Self::QUEEN,
        Self::KING,
    ];

    /// Returns the display name, or `"Unknown"` for values outside 1..=13.
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::QUEEN.name(), "Queen");
    /// assert_eq!(Rank(0).name(), "Unknown");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            1..=13 => RANK_NAMES[(self.0 - 1) as usize],
            _ => UNKNOWN,
        }
    }
}

impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
///
/// Backed by a raw integer: 1 = Spades, 2 = Hearts, 3 = Diamonds, 4 = Clubs.
/// Other values are accepted and display as `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Suit(pub u8);

impl Suit {
    /// Spades.
    pub const SPADES: Self = Self(1);
    /// Hearts.
    pub const HEARTS: Self = Self(2);
    /// Diamonds.
    pub const DIAMONDS: Self = Self(3);
    /// Clubs.
    pub const CLUBS: Self = Self(4);

    /// All defined suits in enumeration order.
    pub const ALL: [Self; 4] = [Self::SPADES, Self::HEARTS, Self::DIAMONDS, Self::CLUBS];

    /// Returns the display name, or `"Unknown"` for values outside 1..=4.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            1..=4 => SUIT_NAMES[(self.0 - 1) as usize],
            _ => UNKNOWN,
        }
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit.0
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: neither the rank nor the suit is validated.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns `"<rank> of <suit>"`, e.g. `"Ace of Spades"`.
    #[must_use]
    pub fn describe(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
