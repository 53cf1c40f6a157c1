//! Property tests for comparators, sorting, and shuffling.

use deckrs::{Card, Deck, Rank, RankingPolicy, SortCards, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_card() -> impl Strategy<Value = Card> {
    (0u8..=15, 0u8..=5).prop_map(|(rank, suit)| Card::new(Rank(rank), Suit(suit)))
}

fn any_policy() -> impl Strategy<Value = RankingPolicy> {
    (
        proptest::sample::subsequence(Suit::ALL.to_vec(), 0..=4).prop_shuffle(),
        proptest::sample::subsequence(Rank::ALL.to_vec(), 0..=13).prop_shuffle(),
    )
        .prop_map(|(suits, ranks)| {
            RankingPolicy::default()
                .with_suit_order(&suits)
                .with_rank_order(&ranks)
        })
}

proptest! {
    #[test]
    fn comparators_are_antisymmetric(a in any_card(), b in any_card(), policy in any_policy()) {
        prop_assert_eq!(policy.compare_by_rank(a, b), policy.compare_by_rank(b, a).reverse());
        prop_assert_eq!(policy.compare_by_suit(a, b), policy.compare_by_suit(b, a).reverse());
    }

    #[test]
    fn sorts_are_non_decreasing(
        mut cards in proptest::collection::vec(any_card(), 0..60),
        policy in any_policy(),
    ) {
        cards.sort_by_rank(&policy);
        for pair in cards.windows(2) {
            prop_assert!(policy.compare_by_rank(pair[0], pair[1]).is_le());
        }

        cards.sort_by_suit(&policy);
        for pair in cards.windows(2) {
            prop_assert!(policy.compare_by_suit(pair[0], pair[1]).is_le());
        }
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let policy = RankingPolicy::default();
        let mut deck = Deck::new();
        deck.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));

        let mut shuffled = deck.to_vec();
        let mut fresh = Deck::new().to_vec();
        shuffled.sort_by_rank(&policy);
        fresh.sort_by_rank(&policy);
        prop_assert_eq!(shuffled, fresh);
    }

    #[test]
    fn put_top_then_draw_restores_deck(
        cards in proptest::collection::vec(any_card(), 0..10),
        extra in any_card(),
    ) {
        let mut deck: Deck = cards.into_iter().collect();
        let before = deck.clone();

        deck.put_top(extra);
        prop_assert_eq!(deck.draw(), Ok(extra));
        prop_assert_eq!(deck, before);
    }
}
