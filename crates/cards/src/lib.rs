// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handplay cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handplay_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.rank().value(), 14);
//! assert_eq!(ah.to_string(), "A♥");
//!
//! let td: Card = "10D".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating hands in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use handplay_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
