//! Ranking tables and comparators.
//!
//! A [`RankingPolicy`] maps every suit and rank to an integer priority. Lower
//! priority sorts first. A suit or rank that the policy has never seen has
//! priority 0, so out-of-range values compare as the lowest.

use core::cmp::Ordering;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};

/// Suit and rank priority tables.
///
/// The default policy orders suits Clubs < Diamonds < Hearts < Spades and
/// ranks Two < Three < ... < King < Ace.
///
/// Use the builder methods to customize the ordering:
///
/// ```
/// use deckrs::{Card, Rank, RankingPolicy, Suit};
///
/// let policy = RankingPolicy::default().with_rank_order(&Rank::ALL);
/// let ace = Card::new(Rank::ACE, Suit::CLUBS);
/// let king = Card::new(Rank::KING, Suit::SPADES);
/// assert!(policy.compare_by_rank(ace, king).is_lt());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingPolicy {
    suits: HashMap<Suit, i32>,
    ranks: HashMap<Rank, i32>,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        let suits = [Suit::CLUBS, Suit::DIAMONDS, Suit::HEARTS, Suit::SPADES]
            .into_iter()
            .zip(1..)
            .collect();
        let ranks = [
            Rank::TWO,
            Rank::THREE,
            Rank::FOUR,
            Rank::FIVE,
            Rank::SIX,
            Rank::SEVEN,
            Rank::EIGHT,
            Rank::NINE,
            Rank::TEN,
            Rank::JACK,
            Rank::QUEEN,
            Rank::KING,
            Rank::ACE,
        ]
        .into_iter()
        .zip(1..)
        .collect();

        Self { suits, ranks }
    }
}

impl RankingPolicy {
    /// Sets suit priorities from an ordered list.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{RankingPolicy, Suit};
    ///
    /// let policy = RankingPolicy::default().with_suit_order(&[Suit::SPADES, Suit::HEARTS]);
    /// assert_eq!(policy.suit_priority(Suit::SPADES), 0);
    /// assert_eq!(policy.suit_priority(Suit::HEARTS), 1);
    /// assert_eq!(policy.suit_priority(Suit::CLUBS), 1);
    /// ```
    #[must_use]
    pub fn with_suit_order(mut self, suits: &[Suit]) -> Self {
        self.set_suit_ranking(suits);
        self
    }

    /// Sets rank priorities from an ordered list.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Rank, RankingPolicy};
    ///
    /// let policy = RankingPolicy::default().with_rank_order(&[Rank::ACE]);
    /// assert_eq!(policy.rank_priority(Rank::ACE), 0);
    /// assert_eq!(policy.rank_priority(Rank::KING), 12);
    /// ```
    #[must_use]
    pub fn with_rank_order(mut self, ranks: &[Rank]) -> Self {
        self.set_rank_ranking(ranks);
        self
    }

    /// Gives each suit its zero-based position in `suits` as its priority.
    ///
    /// Suits missing from the list keep their previous priority. Duplicates
    /// are not rejected; the last position wins.
    pub fn set_suit_ranking(&mut self, suits: &[Suit]) {
        for (priority, &suit) in (0..).zip(suits) {
            self.suits.insert(suit, priority);
        }
    }

    /// Gives each rank its zero-based position in `ranks` as its priority.
    ///
    /// Ranks missing from the list keep their previous priority. Duplicates
    /// are not rejected; the last position wins.
    pub fn set_rank_ranking(&mut self, ranks: &[Rank]) {
        for (priority, &rank) in (0..).zip(ranks) {
            self.ranks.insert(rank, priority);
        }
    }

    /// Returns the priority of `suit`, or 0 if it has none.
    #[must_use]
    pub fn suit_priority(&self, suit: Suit) -> i32 {
        self.suits.get(&suit).copied().unwrap_or_default()
    }

    /// Returns the priority of `rank`, or 0 if it has none.
    #[must_use]
    pub fn rank_priority(&self, rank: Rank) -> i32 {
        self.ranks.get(&rank).copied().unwrap_or_default()
    }

    /// Compares by rank priority, breaking ties by suit priority.
    #[must_use]
    pub fn compare_by_rank(&self, a: Card, b: Card) -> Ordering {
        self.rank_priority(a.rank)
            .cmp(&self.rank_priority(b.rank))
            .then_with(|| self.suit_priority(a.suit).cmp(&self.suit_priority(b.suit)))
    }

    /// Compares by suit priority, breaking ties by rank priority.
    #[must_use]
    pub fn compare_by_suit(&self, a: Card, b: Card) -> Ordering {
        self.suit_priority(a.suit)
            .cmp(&self.suit_priority(b.suit))
            .then_with(|| self.rank_priority(a.rank).cmp(&self.rank_priority(b.rank)))
    }
}

/// The process-wide ranking table.
///
/// Initialized with [`RankingPolicy::default`] on first use. Every call locks
/// the table, so individual calls never observe a half-written update. A
/// sequence of calls (change the table, then sort) is not atomic; callers
/// that share the table across threads must order those sequences themselves.
pub mod global {
    use core::cmp::Ordering;

    use super::RankingPolicy;
    use crate::card::{Card, Rank, Suit};
    use crate::sync::Mutex;

    static RANKING: Mutex<Option<RankingPolicy>> = Mutex::new(None);

    /// Runs `f` against the live table.
    ///
    /// The table stays locked while `f` runs, so `f` must not call back into
    /// this module.
    ///
    /// ```
    /// use deckrs::{Deck, SortCards, ranking};
    ///
    /// let mut deck = Deck::new();
    /// ranking::global::with(|policy| deck.sort_by_suit(policy));
    /// ```
    pub fn with<T>(f: impl FnOnce(&RankingPolicy) -> T) -> T {
        let mut ranking = RANKING.lock();
        f(ranking.get_or_insert_with(RankingPolicy::default))
    }

    fn with_mut<T>(f: impl FnOnce(&mut RankingPolicy) -> T) -> T {
        let mut ranking = RANKING.lock();
        f(ranking.get_or_insert_with(RankingPolicy::default))
    }

    /// Returns a copy of the live table.
    #[must_use]
    pub fn snapshot() -> RankingPolicy {
        with(Clone::clone)
    }

    /// Replaces the live table wholesale.
    pub fn replace(policy: RankingPolicy) {
        log::debug!("replacing global ranking policy");
        *RANKING.lock() = Some(policy);
    }

    /// Restores the default table.
    pub fn reset() {
        replace(RankingPolicy::default());
    }

    /// See [`RankingPolicy::set_suit_ranking`].
    pub fn set_suit_ranking(suits: &[Suit]) {
        log::debug!("setting global suit ranking for {} suits", suits.len());
        with_mut(|policy| policy.set_suit_ranking(suits));
    }

    /// See [`RankingPolicy::set_rank_ranking`].
    pub fn set_rank_ranking(ranks: &[Rank]) {
        log::debug!("setting global rank ranking for {} ranks", ranks.len());
        with_mut(|policy| policy.set_rank_ranking(ranks));
    }

    /// See [`RankingPolicy::compare_by_rank`].
    #[must_use]
    pub fn compare_by_rank(a: Card, b: Card) -> Ordering {
        with(|policy| policy.compare_by_rank(a, b))
    }

    /// See [`RankingPolicy::compare_by_suit`].
    #[must_use]
    pub fn compare_by_suit(a: Card, b: Card) -> Ordering {
        with(|policy| policy.compare_by_suit(a, b))
    }
}
