//! In-place sorting of card sequences.

use crate::card::Card;
use crate::ranking::RankingPolicy;

/// A sequence of cards that can be sorted by a [`RankingPolicy`].
///
/// Both sorts are ascending and in place. Cards with equal rank and suit are
/// interchangeable, so their relative order does not matter.
///
/// ```
/// use deckrs::{Card, Rank, RankingPolicy, SortCards, Suit};
///
/// let mut cards = vec![
///     Card::new(Rank::ACE, Suit::HEARTS),
///     Card::new(Rank::TWO, Suit::SPADES),
/// ];
/// cards.sort_by_rank(&RankingPolicy::default());
/// assert_eq!(cards[0].rank, Rank::TWO);
/// ```
pub trait SortCards {
    /// Sorts by rank, then suit.
    fn sort_by_rank(&mut self, ranking: &RankingPolicy);

    /// Sorts by suit, then rank.
    fn sort_by_suit(&mut self, ranking: &RankingPolicy);
}

impl SortCards for [Card] {
    fn sort_by_rank(&mut self, ranking: &RankingPolicy) {
        self.sort_by(|&a, &b| ranking.compare_by_rank(a, b));
    }

    fn sort_by_suit(&mut self, ranking: &RankingPolicy) {
        self.sort_by(|&a, &b| ranking.compare_by_suit(a, b));
    }
}
