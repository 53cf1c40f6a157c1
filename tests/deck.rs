//! Deck integration tests.

use deckrs::{Card, DECK_SIZE, Deck, DrawError, Rank, RankingPolicy, SortCards, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn sorted(deck: &Deck) -> Vec<Card> {
    let mut cards = deck.to_vec();
    cards.sort_by_suit(&RankingPolicy::default());
    cards
}

#[test]
fn new_deck_is_suit_major_rank_minor() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let expected: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| card(rank, suit)))
        .collect();
    assert_eq!(deck.to_vec(), expected);

    let cards = deck.to_vec();
    assert_eq!(cards[0], card(Rank::ACE, Suit::SPADES));
    assert_eq!(cards[12], card(Rank::KING, Suit::SPADES));
    assert_eq!(cards[13], card(Rank::ACE, Suit::HEARTS));
    assert_eq!(cards[51], card(Rank::KING, Suit::CLUBS));
}

#[test]
fn new_deck_has_no_duplicates() {
    let deck = Deck::new();
    let unique: std::collections::HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn default_deck_is_full() {
    assert_eq!(Deck::default(), Deck::new());
}

#[test]
fn draw_takes_from_top() {
    let mut deck = Deck::new();
    let before = deck.to_vec();

    let drawn = deck.draw().unwrap();
    assert_eq!(drawn, before[0]);
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert_eq!(deck.to_vec(), before[1..]);
}

#[test]
fn draw_until_empty_then_error() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), DrawError::EmptyDeck);
    assert_eq!(deck.len(), 0);
    assert_eq!(deck.top(), None);
}

#[test]
fn empty_deck_error_message() {
    let mut deck = Deck::empty();
    let err = deck.draw().unwrap_err();
    assert_eq!(err.to_string(), "couldn't draw, deck is empty");
}

#[test]
fn put_top_then_draw_round_trips() {
    let mut deck = Deck::new();
    deck.shuffle();
    let before = deck.clone();
    let joker = card(Rank(0), Suit(0));

    deck.put_top(joker);
    assert_eq!(deck.len(), DECK_SIZE + 1);
    assert_eq!(deck.top(), Some(&joker));

    assert_eq!(deck.draw().unwrap(), joker);
    assert_eq!(deck, before);
}

#[test]
fn put_bottom_on_empty_deck_is_drawn_next() {
    let mut deck = Deck::empty();
    let queen = card(Rank::QUEEN, Suit::HEARTS);

    deck.put_bottom(queen);
    assert_eq!(deck.draw().unwrap(), queen);
    assert!(deck.is_empty());
}

#[test]
fn put_bottom_goes_under_existing_cards() {
    let mut deck: Deck = vec![card(Rank::TWO, Suit::CLUBS)].into();
    deck.put_bottom(card(Rank::THREE, Suit::CLUBS));
    deck.put_top(card(Rank::ACE, Suit::CLUBS));

    let ranks: Vec<Rank> = deck.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, [Rank::ACE, Rank::TWO, Rank::THREE]);
}

#[test]
fn decks_may_hold_duplicates() {
    let seven = card(Rank::SEVEN, Suit::DIAMONDS);
    let mut deck: Deck = core::iter::repeat_n(seven, 3).collect();
    deck.extend([seven]);

    assert_eq!(deck.len(), 4);
    assert!(deck.into_iter().all(|c| c == seven));
}

#[test]
fn shuffle_preserves_cards() {
    let mut deck = Deck::new();
    let before = sorted(&deck);

    deck.shuffle();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(sorted(&deck), before);
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let mut a = Deck::new();
    let mut b = Deck::new();

    a.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
    b.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
    assert_ne!(a, Deck::new());
}

#[test]
fn shuffle_handles_tiny_decks() {
    let mut empty = Deck::empty();
    empty.shuffle();
    assert!(empty.is_empty());

    let ace = card(Rank::ACE, Suit::SPADES);
    let mut single: Deck = vec![ace].into();
    single.shuffle();
    assert_eq!(single.to_vec(), [ace]);
}

#[test]
fn display_lists_cards_top_first() {
    let deck: Deck = vec![
        card(Rank::ACE, Suit::SPADES),
        card(Rank::TEN, Suit::HEARTS),
    ]
    .into();
    assert_eq!(deck.to_string(), "[Ace of Spades Ten of Hearts]");
    assert_eq!(Deck::empty().to_string(), "[]");
}
