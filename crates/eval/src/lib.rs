// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcall poker hand category evaluator.
//!
//! Given between 2 and 7 distinct cards [evaluate] returns the single best
//! [HandCategory] present, without kicker resolution:
//!
//! ```
//! # use handcall_eval::{evaluate, Card, HandCategory, Rank, Suit};
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//! assert_eq!(evaluate(&cards)?, HandCategory::Pair);
//! # Ok::<(), handcall_eval::EvalError>(())
//! ```
//!
//! The evaluator is a pure function, repeated calls on the same cards return
//! the same category.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, evaluate};

// Reexport cards types.
pub use handcall_cards::{Card, Deck, DeckError, Rank, Suit};
