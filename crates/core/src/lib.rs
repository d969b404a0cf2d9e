// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handplay game session and scoring types.
//!
//! A [Session] owns the deck, the player hand, the round counters, and a
//! [ScoreTracker] that escalates a category multiplier each time the category
//! is played:
//!
//! ```
//! # use handplay_core::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut session = Session::with_rng(Config::default(), StdRng::seed_from_u64(1));
//! assert_eq!(session.hand().len(), 8);
//!
//! let outcome = session.play(&[0, 1]).unwrap();
//! assert_eq!(outcome.score.value.category(), HandCategory::HighCard);
//! assert_eq!(session.plays_remaining(), 2);
//! assert_eq!(session.round_score(), outcome.score.points as u64);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod score;
pub use score::{Score, ScoreTracker};

pub mod session;
pub use session::{Config, GameError, PlayOutcome, Session, SortOrder};

// Reexport cards and evaluation types.
pub use handplay_eval::{Card, Deck, EvalError, HandCategory, HandValue, Rank, Suit};
