//! The deck: a stack of cards with the top at the front.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;
use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;
use crate::ranking::RankingPolicy;
use crate::sort::SortCards;
use crate::sync::Mutex;

/// Process-wide shuffle stream, seeded on first use.
static SHUFFLE_RNG: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);

#[cfg(feature = "std")]
fn process_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

#[cfg(not(feature = "std"))]
const fn process_seed() -> u64 {
    0
}

/// Reseeds the stream used by [`Deck::shuffle`].
///
/// Without a call to this function the stream is seeded from the system clock
/// the first time a deck is shuffled (or from 0 without `std`).
pub fn seed_shuffle(seed: u64) {
    log::debug!("reseeding shuffle stream with {seed}");
    *SHUFFLE_RNG.lock() = Some(ChaCha8Rng::seed_from_u64(seed));
}

/// An ordered stack of cards.
///
/// No uniqueness is enforced: a deck may hold duplicates or fewer than
/// [`DECK_SIZE`] cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards from top (front) to bottom (back).
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Suits run Spades, Hearts, Diamonds, Clubs; within each suit ranks run
    /// Ace through King. The Ace of Spades is on top.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DECK_SIZE, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.top(), Some(&Card::new(Rank::ACE, Suit::SPADES)));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Shuffles the deck using the process-wide shuffle stream.
    pub fn shuffle(&mut self) {
        let mut rng = SHUFFLE_RNG.lock();
        let rng = rng.get_or_insert_with(|| {
            let seed = process_seed();
            log::debug!("seeding shuffle stream with {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        });
        self.shuffle_with(rng);
    }

    /// Shuffles the deck with the given random source.
    ///
    /// Walks from the bottom up, swapping each position `i - 1` with a
    /// uniformly chosen index in `0..i`.
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        log::trace!("shuffling {} cards", self.cards.len());
        for i in (1..=self.cards.len()).rev() {
            let j = rng.random_range(0..i);
            self.cards.swap(i - 1, j);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if there are no cards. The deck is
    /// left unchanged.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or(DrawError::EmptyDeck)
    }

    /// Places a card on top of the deck.
    pub fn put_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Places a card at the bottom of the deck.
    pub fn put_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Copies the cards, top first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl SortCards for Deck {
    fn sort_by_rank(&mut self, ranking: &RankingPolicy) {
        self.cards.make_contiguous().sort_by_rank(ranking);
    }

    fn sort_by_suit(&mut self, ranking: &RankingPolicy) {
        self.cards.make_contiguous().sort_by_suit(ranking);
    }
}

impl From<Vec<Card>> for Deck {
    /// The first element becomes the top card.
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
