// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand category evaluator.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use handcall_cards::{Card, Rank};

/// The poker hand categories, from weakest to strongest.
///
/// The ordering groups categories for presentation, it is not a hand
/// comparison, two hands in the same category are not resolved further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category matched.
    HighCard = 0,
    /// One rank appears twice.
    Pair,
    /// Two distinct ranks appear twice.
    TwoPair,
    /// One rank appears three times.
    Trips,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// One rank appears four times.
    Quads,
    /// Five consecutive ranks of one suit.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories, weakest first.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            Trips,
            Straight,
            Flush,
            FullHouse,
            Quads,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Trips => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::Quads => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{label}")
    }
}

/// Errors from evaluating a set of cards.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The number of cards is outside the supported range.
    #[error("cannot evaluate {0} cards, expected 2 to 7")]
    InvalidCardCount(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Evaluates the best hand category for a set of 2 to 7 distinct cards.
///
/// Categories are checked from strongest to weakest over rank and suit
/// histograms, the first match wins. Fails with [EvalError] if the input
/// holds duplicate cards or its size is outside `2..=7`.
pub fn evaluate(cards: &[Card]) -> Result<HandCategory, EvalError> {
    if !(2..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidCardCount(cards.len()));
    }

    let mut seen = AHashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card.id()) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    let mut rank_counts = [0u8; 13];
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask = 0u16;
    for card in cards {
        let (rank, suit) = (card.rank() as usize, card.suit() as usize);
        rank_counts[rank] += 1;
        suit_counts[suit] += 1;
        suit_masks[suit] |= 1 << rank;
        rank_mask |= 1 << rank;
    }

    let flush_suit = suit_counts.iter().position(|&n| n >= 5);
    if let Some(suit) = flush_suit {
        if has_straight(suit_masks[suit]) {
            return Ok(HandCategory::StraightFlush);
        }
    }

    if rank_counts.iter().any(|&n| n >= 4) {
        return Ok(HandCategory::Quads);
    }

    let trips_rank = rank_counts.iter().position(|&n| n >= 3);
    if let Some(trips) = trips_rank {
        let has_pair = rank_counts
            .iter()
            .enumerate()
            .any(|(rank, &n)| rank != trips && n >= 2);
        if has_pair {
            return Ok(HandCategory::FullHouse);
        }
    }

    if flush_suit.is_some() {
        return Ok(HandCategory::Flush);
    }

    if has_straight(rank_mask) {
        return Ok(HandCategory::Straight);
    }

    if trips_rank.is_some() {
        return Ok(HandCategory::Trips);
    }

    match rank_counts.iter().filter(|&&n| n >= 2).count() {
        0 => Ok(HandCategory::HighCard),
        1 => Ok(HandCategory::Pair),
        _ => Ok(HandCategory::TwoPair),
    }
}

/// Checks a rank bitmask for five consecutive ranks.
///
/// The ace counts high and, only in the A-2-3-4-5 wheel, low. No other
/// wrap-around forms a straight.
fn has_straight(ranks: u16) -> bool {
    const RUN: u16 = 0b11111;
    const WHEEL: u16 = (1 << (Rank::Ace as u16)) | 0b1111;

    let run = (0..=8).any(|shift| {
        let window = RUN << shift;
        (ranks & window) == window
    });

    run || (ranks & WHEEL) == WHEEL
}
