// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use handplay_cards::Card;

use super::HandCategory;

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The selection is empty or has more than [HandValue::MAX_CARDS] cards.
    #[error("must play 1 to 5 cards, got {0}")]
    InvalidHandSize(usize),
}

/// The category and base points of a played selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    category: HandCategory,
    points: u32,
}

impl HandValue {
    /// The maximum number of cards in a selection.
    pub const MAX_CARDS: usize = 5;

    /// Evaluates a selection of 1 to 5 cards.
    ///
    /// The result only depends on the cards and not on their order, the caller
    /// is responsible for passing distinct cards.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        match cards.len() {
            0 => Err(EvalError::InvalidHandSize(0)),
            n if n < Self::MAX_CARDS => {
                let high = cards.iter().map(Card::value).max().unwrap_or_default();
                Ok(Self {
                    category: HandCategory::HighCard,
                    points: high as u32 + n as u32,
                })
            }
            Self::MAX_CARDS => {
                let category = classify(cards);
                Ok(Self {
                    category,
                    points: category.base_points(),
                })
            }
            n => Err(EvalError::InvalidHandSize(n)),
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand base points before any multiplier.
    pub fn base_points(&self) -> u32 {
        self.points
    }
}

/// Classifies a 5 cards hand, checks go from strongest to weakest and the first
/// match wins.
fn classify(cards: &[Card]) -> HandCategory {
    debug_assert_eq!(cards.len(), HandValue::MAX_CARDS);

    let mut values = [0u8; HandValue::MAX_CARDS];
    for (v, c) in values.iter_mut().zip(cards) {
        *v = c.value();
    }
    values.sort_unstable();

    // Occurrences of each value, indexed by card value.
    let mut counts = [0u8; 15];
    for v in values {
        counts[v as usize] += 1;
    }

    let has = |n: u8| counts.contains(&n);
    let pairs = counts.iter().filter(|&&n| n == 2).count();

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_straight = !has(2) && !has(3) && !has(4) && values[4] - values[0] == 4;

    if is_flush && values == [10, 11, 12, 13, 14] {
        HandCategory::RoyalFlush
    } else if is_flush && is_straight {
        HandCategory::StraightFlush
    } else if has(4) {
        HandCategory::FourOfKind
    } else if has(3) && has(2) {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if has(3) {
        HandCategory::ThreeOfKind
    } else if pairs == 2 {
        HandCategory::TwoPair
    } else if pairs == 1 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use handplay_cards::{Deck, Rank, Suit};
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<_>>()
    }

    fn eval(s: &str) -> (HandCategory, u32) {
        let value = HandValue::eval(&cards(s)).unwrap();
        (value.category(), value.base_points())
    }

    /// Calls `f` with every permutation of `cards` (Heap's algorithm).
    fn permutations(cards: &mut [Card], k: usize, f: &mut impl FnMut(&[Card])) {
        if k <= 1 {
            f(cards);
            return;
        }

        permutations(cards, k - 1, f);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                cards.swap(i, k - 1);
            } else {
                cards.swap(0, k - 1);
            }
            permutations(cards, k - 1, f);
        }
    }

    #[test]
    fn eval_categories() {
        use HandCategory::*;

        assert_eq!(eval("10H JH QH KH AH"), (RoyalFlush, 100));
        assert_eq!(eval("9S 10S JS QS KS"), (StraightFlush, 75));
        assert_eq!(eval("2D 3D 4D 5D 6D"), (StraightFlush, 75));
        assert_eq!(eval("7C 7D 7H 7S 2C"), (FourOfKind, 50));
        assert_eq!(eval("2C 2D 3H 3S 3C"), (FullHouse, 25));
        assert_eq!(eval("2C 4C 6C 8C 10C"), (Flush, 20));
        assert_eq!(eval("2C 3D 4H 5S 6C"), (Straight, 15));
        assert_eq!(eval("10C JD QH KS AC"), (Straight, 15));
        assert_eq!(eval("9C 9D 9H KS 2C"), (ThreeOfKind, 10));
        assert_eq!(eval("9C 9D KH KS 2C"), (TwoPair, 5));
        assert_eq!(eval("9C 9D KH QS 2C"), (Pair, 2));
        assert_eq!(eval("2C 5D 9H JS KC"), (HighCard, 1));
    }

    #[test]
    fn eval_short_selections() {
        use HandCategory::*;

        assert_eq!(eval("AC"), (HighCard, 15));
        assert_eq!(eval("2C"), (HighCard, 3));
        assert_eq!(eval("KC KD"), (HighCard, 15));
        assert_eq!(eval("3H 3D 3S"), (HighCard, 6));
        assert_eq!(eval("10H JH QH KH"), (HighCard, 17));
        assert_eq!(eval("5S 5C 5D 5H"), (HighCard, 9));
    }

    #[test]
    fn eval_invalid_size() {
        assert_eq!(HandValue::eval(&[]), Err(EvalError::InvalidHandSize(0)));

        let six = cards("2C 3C 4C 5C 6C 7C");
        assert_eq!(HandValue::eval(&six), Err(EvalError::InvalidHandSize(6)));

        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        assert_eq!(
            HandValue::eval(&deck),
            Err(EvalError::InvalidHandSize(Deck::SIZE))
        );
    }

    #[test]
    fn ace_is_never_low() {
        assert_eq!(eval("AC 2C 3C 4C 5C"), (HandCategory::Flush, 20));
        assert_eq!(eval("AC 2D 3H 4S 5C"), (HandCategory::HighCard, 1));
        assert_eq!(eval("JC QD KH AS 2C"), (HandCategory::HighCard, 1));
    }

    #[test]
    fn eval_is_order_independent() {
        let hands = [
            "2C 2D 3H 3S 3C",
            "10H JH QH KH AH",
            "2C 3D 4H 5S 6C",
            "9C 9D KH KS 2C",
            "2C 5D 9H JS KC",
            "2C 4C 6C 8C 10C",
        ];

        for hand in hands {
            let mut cards = cards(hand);
            let expected = HandValue::eval(&cards).unwrap();

            let mut results = HashSet::default();
            let mut count = 0;
            permutations(&mut cards, 5, &mut |perm| {
                results.insert(HandValue::eval(perm).unwrap());
                count += 1;
            });

            assert_eq!(count, 120);
            assert_eq!(results.len(), 1, "{hand}");
            assert!(results.contains(&expected));
        }
    }

    #[test]
    fn eval_random_hands_shuffled() {
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut hand = (0..5).filter_map(|_| deck.deal()).collect::<Vec<_>>();

            let expected = HandValue::eval(&hand).unwrap();
            hand.shuffle(&mut rng);
            assert_eq!(HandValue::eval(&hand).unwrap(), expected);
            hand.reverse();
            assert_eq!(HandValue::eval(&hand).unwrap(), expected);
        }
    }

    #[test]
    fn four_of_kind_beats_full_house() {
        for quad in Rank::ranks() {
            for other in Rank::ranks().filter(|r| *r != quad) {
                let mut four = Suit::suits()
                    .map(|s| Card::new(quad, s))
                    .collect::<Vec<_>>();
                four.push(Card::new(other, Suit::Hearts));
                let four = HandValue::eval(&four).unwrap();
                assert_eq!(four.category(), HandCategory::FourOfKind);

                let mut full = Suit::suits()
                    .take(3)
                    .map(|s| Card::new(quad, s))
                    .collect::<Vec<_>>();
                full.push(Card::new(other, Suit::Clubs));
                full.push(Card::new(other, Suit::Spades));
                let full = HandValue::eval(&full).unwrap();
                assert_eq!(full.category(), HandCategory::FullHouse);

                assert!(four.category() > full.category());
                assert!(four.base_points() > full.base_points());
            }
        }
    }

    #[test]
    fn eval_all_hands() {
        let deck = Deck::default();
        let mut counts = [0usize; HandCategory::COUNT];

        deck.for_each(5, |hand| {
            let value = HandValue::eval(hand).unwrap();
            assert_eq!(value.base_points(), value.category().base_points());
            counts[value.category().index()] += 1;
        });

        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
        assert_eq!(counts[HandCategory::RoyalFlush.index()], 4);
        assert_eq!(counts[HandCategory::StraightFlush.index()], 32);
        assert_eq!(counts[HandCategory::FourOfKind.index()], 624);
        assert_eq!(counts[HandCategory::FullHouse.index()], 3_744);
        assert_eq!(counts[HandCategory::Flush.index()], 5_112);
        assert_eq!(counts[HandCategory::Straight.index()], 9_180);
        assert_eq!(counts[HandCategory::ThreeOfKind.index()], 54_912);
        assert_eq!(counts[HandCategory::TwoPair.index()], 123_552);
        assert_eq!(counts[HandCategory::Pair.index()], 1_098_240);
        assert_eq!(counts[HandCategory::HighCard.index()], 1_303_560);
    }

    #[test]
    fn short_hands_are_high_cards() {
        let deck = Deck::default();

        for k in 1..5 {
            deck.for_each(k, |hand| {
                let value = HandValue::eval(hand).unwrap();
                let high = hand.iter().map(|c| c.value()).max().unwrap();
                assert_eq!(value.category(), HandCategory::HighCard);
                assert_eq!(value.base_points(), high as u32 + k as u32);
            });
        }
    }
}
