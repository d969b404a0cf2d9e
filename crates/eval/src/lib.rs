// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handplay hand evaluator.
//!
//! Classifies a selection of 1 to 5 cards into one of ten [HandCategory] and
//! returns the category base points. Selections with fewer than 5 cards are
//! always a high card scored as the highest card value plus the number of cards.
//!
//! ```
//! # use handplay_eval::*;
//! let cards = ["10H", "JH", "QH", "KH", "AH"]
//!     .iter()
//!     .map(|c| c.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let value = HandValue::eval(&cards).unwrap();
//! assert_eq!(value.category(), HandCategory::RoyalFlush);
//! assert_eq!(value.base_points(), 100);
//!
//! let value = HandValue::eval(&cards[4..]).unwrap();
//! assert_eq!(value.category(), HandCategory::HighCard);
//! assert_eq!(value.base_points(), 15);
//!
//! assert_eq!(HandValue::eval(&[]), Err(EvalError::InvalidHandSize(0)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, HandValue};

// Reexport cards types.
pub use handplay_cards::{Card, Deck, Rank, Suit};
