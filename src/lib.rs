//! A standard 52-card deck with configurable ranking and optional `no_std` support.
//!
//! Cards are compared through a [`RankingPolicy`], either one you own or the
//! process-wide table in [`ranking::global`]. A [`Deck`] is a stack of cards
//! that can be shuffled, drawn from the top, and refilled at either end.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DrawError, RankingPolicy, SortCards};
//!
//! let mut deck = Deck::new();
//! deck.shuffle();
//! let card = deck.draw()?;
//! deck.put_bottom(card);
//! deck.sort_by_rank(&RankingPolicy::default());
//! # Ok::<(), DrawError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod ranking;
pub mod sort;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, seed_shuffle};
pub use error::DrawError;
pub use ranking::RankingPolicy;
pub use sort::SortCards;
