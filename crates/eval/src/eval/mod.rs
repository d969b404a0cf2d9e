// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator only looks at card values and suits, aces are always high so
//! that A-2-3-4-5 is not a straight. A selection with less than 5 cards skips
//! the poker classification and is scored as a high card.

mod category;
pub use category::HandCategory;

mod value;
pub use value::{EvalError, HandValue};
