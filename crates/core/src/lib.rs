// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcall game engine.
//!
//! A single player guessing game: the player holds a two cards pocket, the
//! board reveals shared cards in increments, and before every reveal the
//! player names the best poker hand category the combined cards make. A
//! correct call scores, the hand ends once the last board card has been
//! called.
//!
//! The [Game] controller owns the deck, the randomness source, and the round
//! progression. A presentation collaborator drives it with three calls:
//!
//! ```
//! use handcall_core::{Game, HandCategory};
//!
//! let mut game = Game::with_seed(42)?;
//!
//! // Read the observable snapshot and submit a guess.
//! assert_eq!(game.state().board().len(), 0);
//! let outcome = game.check_selected_hand(HandCategory::Pair)?;
//! assert_eq!(outcome.guess, HandCategory::Pair);
//! assert_eq!(game.state().board().len(), 3);
//!
//! // Start over at any point.
//! game.reset_game()?;
//! assert_eq!(game.state().score(), 0);
//! # Ok::<(), handcall_core::GameError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod error;
pub mod game;
pub mod game_state;

pub use error::GameError;
pub use game::{GUESS_REWARD, Game, GuessOutcome, Stage};
pub use game_state::GameState;

// Reexport cards and evaluator types.
pub use handcall_cards::{Card, Deck, DeckError, Rank, Suit};
pub use handcall_eval::{EvalError, HandCategory, evaluate};
