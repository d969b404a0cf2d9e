// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single player game session.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use handplay_eval::{Card, Deck, EvalError, HandValue};

use crate::score::{Score, ScoreTracker};

/// Game rules config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The number of cards in the hand.
    pub hand_size: usize,
    /// The number of hands that can be played in a round.
    pub plays_per_round: u32,
    /// The number of discard actions in a round.
    pub discards_per_round: u32,
    /// The maximum number of cards for a discard action.
    pub max_discards: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: 8,
            plays_per_round: 3,
            discards_per_round: 4,
            max_discards: 3,
        }
    }
}

/// Session errors, a failed action leaves the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// All plays for this round have been used.
    #[error("no plays remaining this round")]
    NoPlaysLeft,
    /// All discards for this round have been used.
    #[error("no discards remaining this round")]
    NoDiscardsLeft,
    /// A selected index is not in the hand.
    #[error("invalid card index {index}, use numbers 0-{}", .hand_size.saturating_sub(1))]
    InvalidIndex {
        /// The selected index.
        index: usize,
        /// The number of cards in the hand.
        hand_size: usize,
    },
    /// The same index was selected twice.
    #[error("card {0} selected more than once")]
    DuplicateIndex(usize),
    /// Too many cards selected for a discard.
    #[error("can't discard {count} cards, maximum is {max} cards per action")]
    TooManyDiscards {
        /// The number of selected cards.
        count: usize,
        /// The discard limit.
        max: usize,
    },
    /// The selected cards can't be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Hand sorting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Sort by rank and then by suit.
    #[default]
    Rank,
    /// Sort by suit and then by rank.
    Suit,
}

impl SortOrder {
    /// Returns the other sort order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Rank => SortOrder::Suit,
            SortOrder::Suit => SortOrder::Rank,
        }
    }
}

/// The result of a played hand.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    /// The played cards.
    pub cards: Vec<Card>,
    /// The play score.
    pub score: Score,
}

/// A game session with the deck, the hand, and the scores.
#[derive(Debug)]
pub struct Session {
    config: Config,
    rng: StdRng,
    deck: Deck,
    hand: Vec<Card>,
    sort_order: SortOrder,
    tracker: ScoreTracker,
    round: u32,
    total_score: u64,
    round_score: u64,
    plays_remaining: u32,
    discards_remaining: u32,
}

impl Session {
    /// Creates a new session with a random seed.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a new session with the given rng.
    pub fn with_rng(config: Config, mut rng: StdRng) -> Self {
        let deck = Deck::new_and_shuffled(&mut rng);
        let mut session = Self {
            plays_remaining: config.plays_per_round,
            discards_remaining: config.discards_per_round,
            config,
            rng,
            deck,
            hand: Vec::default(),
            sort_order: SortOrder::default(),
            tracker: ScoreTracker::new(),
            round: 1,
            total_score: 0,
            round_score: 0,
        };

        session.fill_hand();
        session
    }

    /// The session config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The cards in the hand in the current sort order.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The current round starting from 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The number of completed rounds.
    pub fn rounds_completed(&self) -> u32 {
        self.round - 1
    }

    /// The score of all completed rounds.
    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// The score of the current round.
    pub fn round_score(&self) -> u64 {
        self.round_score
    }

    /// The total score including the current round.
    pub fn final_score(&self) -> u64 {
        self.total_score + self.round_score
    }

    /// Plays remaining in this round.
    pub fn plays_remaining(&self) -> u32 {
        self.plays_remaining
    }

    /// Discards remaining in this round.
    pub fn discards_remaining(&self) -> u32 {
        self.discards_remaining
    }

    /// The hand sort order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The session score tracker.
    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    /// Checks if there are no plays and no discards left in this round.
    pub fn is_round_over(&self) -> bool {
        self.plays_remaining == 0 && self.discards_remaining == 0
    }

    /// Plays the cards at the given hand indices.
    ///
    /// Played cards stay in the hand, only discards replace cards.
    pub fn play(&mut self, indices: &[usize]) -> Result<PlayOutcome, GameError> {
        if self.plays_remaining == 0 {
            return Err(GameError::NoPlaysLeft);
        }

        self.check_selection(indices)?;

        let cards = indices.iter().map(|&idx| self.hand[idx]).collect::<Vec<_>>();
        let value = HandValue::eval(&cards)?;
        let score = self.tracker.score(&value);

        self.tracker.record_play(value.category());
        self.round_score += u64::from(score.points);
        self.plays_remaining -= 1;

        debug!(
            "Round {} played {} {:?} for {} points",
            self.round,
            value.category(),
            cards,
            score.points
        );

        Ok(PlayOutcome { cards, score })
    }

    /// Discards the cards at the given hand indices and draws replacements,
    /// returns the number of discarded cards.
    ///
    /// An empty selection is accepted and uses a discard action.
    pub fn discard(&mut self, indices: &[usize]) -> Result<usize, GameError> {
        if self.discards_remaining == 0 {
            return Err(GameError::NoDiscardsLeft);
        }

        if indices.len() > self.config.max_discards {
            return Err(GameError::TooManyDiscards {
                count: indices.len(),
                max: self.config.max_discards,
            });
        }

        self.check_selection(indices)?;

        // Remove from the back so that indices stay valid.
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        for idx in sorted {
            self.hand.remove(idx);
        }

        self.fill_hand();
        self.discards_remaining -= 1;

        debug!("Round {} discarded {} cards", self.round, indices.len());

        Ok(indices.len())
    }

    /// Switches the hand sort order and sorts the hand.
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        self.sort_hand();
        self.sort_order
    }

    /// Adds the round score to the total and starts a new round with a new
    /// deck and hand, category multipliers are kept.
    pub fn start_new_round(&mut self) {
        info!(
            "Round {} completed with {} points",
            self.round, self.round_score
        );

        self.total_score += self.round_score;
        self.round_score = 0;
        self.plays_remaining = self.config.plays_per_round;
        self.discards_remaining = self.config.discards_per_round;
        self.round += 1;

        self.deck = Deck::new_and_shuffled(&mut self.rng);
        self.hand.clear();
        self.fill_hand();
    }

    fn check_selection(&self, indices: &[usize]) -> Result<(), GameError> {
        for (pos, &index) in indices.iter().enumerate() {
            if index >= self.hand.len() {
                return Err(GameError::InvalidIndex {
                    index,
                    hand_size: self.hand.len(),
                });
            }

            if indices[..pos].contains(&index) {
                return Err(GameError::DuplicateIndex(index));
            }
        }

        Ok(())
    }

    fn fill_hand(&mut self) {
        while self.hand.len() < self.config.hand_size {
            let card = self.draw();
            self.hand.push(card);
        }

        self.sort_hand();
    }

    /// Deals a card, an empty deck is replaced by a new shuffled deck.
    fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.deck.deal() {
                return card;
            }

            debug!("Deck is empty, shuffling a new deck");
            self.deck = Deck::new_and_shuffled(&mut self.rng);
        }
    }

    fn sort_hand(&mut self) {
        match self.sort_order {
            SortOrder::Rank => self.hand.sort_by_key(|c| (c.rank(), c.suit())),
            SortOrder::Suit => self.hand.sort_by_key(|c| (c.suit(), c.rank())),
        }
    }
}
