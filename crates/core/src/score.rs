// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Score multipliers.
use serde::{Deserialize, Serialize};

use handplay_eval::{HandCategory, HandValue};

/// Base multipliers for each category indexed by [HandCategory::index].
pub const BASE_MULTIPLIERS: [f64; HandCategory::COUNT] =
    [1.0, 1.2, 1.3, 1.5, 2.0, 2.0, 2.5, 3.0, 4.0, 5.0];

/// Fraction of the base multiplier added every time a category is played.
pub const ESCALATION: f64 = 0.1;

/// A scored play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// The evaluated hand.
    pub value: HandValue,
    /// The category multiplier at the time of the play.
    pub multiplier: f64,
    /// The hand base points times the multiplier, rounded down.
    pub points: u32,
}

/// Tracks how many times each category has been played and computes the
/// escalated multipliers.
///
/// Play counts are never reset, a tracker lives as long as its game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTracker {
    base: [f64; HandCategory::COUNT],
    plays: [u32; HandCategory::COUNT],
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTracker {
    /// Creates a tracker with the default [BASE_MULTIPLIERS].
    pub fn new() -> Self {
        Self::with_base_multipliers(BASE_MULTIPLIERS)
    }

    /// Creates a tracker with custom base multipliers.
    pub fn with_base_multipliers(base: [f64; HandCategory::COUNT]) -> Self {
        Self {
            base,
            plays: [0; HandCategory::COUNT],
        }
    }

    /// The multiplier for a category before escalation.
    pub fn base_multiplier(&self, category: HandCategory) -> f64 {
        self.base[category.index()]
    }

    /// How many times a category has been played.
    pub fn plays(&self, category: HandCategory) -> u32 {
        self.plays[category.index()]
    }

    /// The current multiplier for a category.
    pub fn multiplier_for(&self, category: HandCategory) -> f64 {
        let plays = self.plays(category) as f64;
        self.base_multiplier(category) * (1.0 + plays * ESCALATION)
    }

    /// Records a play for a category.
    pub fn record_play(&mut self, category: HandCategory) {
        self.plays[category.index()] += 1;
    }

    /// Scores a hand with the current multiplier without recording the play.
    pub fn score(&self, value: &HandValue) -> Score {
        let multiplier = self.multiplier_for(value.category());
        let points = (value.base_points() as f64 * multiplier).floor() as u32;
        Score {
            value: *value,
            multiplier,
            points,
        }
    }
}
