// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base points for each category indexed by [HandCategory::index].
const BASE_POINTS: [u32; HandCategory::COUNT] = [1, 2, 5, 10, 15, 20, 25, 50, 75, 100];

/// A poker hand category, variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category matches.
    HighCard,
    /// One value appears twice.
    Pair,
    /// Two values appear twice.
    TwoPair,
    /// One value appears three times.
    ThreeOfKind,
    /// Five consecutive values.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// One value appears four times.
    FourOfKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// Ten to ace of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from weakest to strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfKind,
            Straight,
            Flush,
            FullHouse,
            FourOfKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category position from 0 for [HandCategory::HighCard] to 9 for
    /// [HandCategory::RoyalFlush], use it to index per category tables.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The fixed points for a 5 cards hand of this category.
    pub fn base_points(&self) -> u32 {
        BASE_POINTS[self.index()]
    }

    /// The category display name.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
