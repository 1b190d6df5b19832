// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game engine error types.
use thiserror::Error;

use handcall_cards::DeckError;
use handcall_eval::EvalError;

use crate::game::Stage;

/// Errors from game transitions.
///
/// All variants are fatal, the engine rejects the call and leaves the game
/// state untouched rather than mutating it partially.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The deck could not serve a deal.
    ///
    /// A session consumes 7 of 52 cards, hitting this means a broken deck
    /// invariant.
    #[error(transparent)]
    InsufficientCards(#[from] DeckError),
    /// The evaluator rejected the pocket and board cards.
    #[error(transparent)]
    InvalidCardSet(#[from] EvalError),
    /// An action arrived in a stage that does not accept it.
    #[error("action not accepted in the {0:?} stage")]
    InvalidStateTransition(Stage),
}
