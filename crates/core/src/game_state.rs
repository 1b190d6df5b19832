// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Observable game state types.
use serde::{Deserialize, Serialize};

use handcall_cards::Card;
use handcall_eval::HandCategory;

/// A read-only snapshot of the observable game state.
///
/// The [Game](crate::Game) controller publishes a fresh snapshot after every
/// transition, readers can clone or serialize it but never mutate the game
/// through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pocket: [Card; 2],
    board: Vec<Card>,
    choices: Vec<HandCategory>,
    score: u32,
    game_over: bool,
}

impl GameState {
    pub(crate) fn new(pocket: [Card; 2], board: &[Card], score: u32, game_over: bool) -> Self {
        // Offer every category at every step, strongest first as the
        // presentation order.
        let choices = HandCategory::categories().rev().collect();
        Self {
            pocket,
            board: board.to_vec(),
            choices,
            score,
            game_over,
        }
    }

    /// The private pocket cards, sorted by rank.
    pub fn pocket(&self) -> &[Card; 2] {
        &self.pocket
    }

    /// The revealed board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The hand categories offered for the current step.
    pub fn choices(&self) -> &[HandCategory] {
        &self.choices
    }

    /// The current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
