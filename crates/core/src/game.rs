// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round controller for the guessing game.
use log::{debug, info};
use rand::prelude::*;

use handcall_cards::{Card, Deck};
use handcall_eval::{HandCategory, evaluate};

use crate::{GameError, GameState};

/// Score awarded for naming the evaluated category.
pub const GUESS_REWARD: u32 = 1;

/// The number of cards in the pocket.
const POCKET_SIZE: usize = 2;

/// The number of board cards on a full board.
const BOARD_SIZE: usize = 5;

/// The game stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The controller is dealing a new hand.
    Dealing,
    /// The player has to pick a hand category.
    AwaitingGuess,
    /// The full board has been called, terminal until a reset.
    GameOver,
}

/// The outcome of a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The category the player picked.
    pub guess: HandCategory,
    /// The category the evaluator found.
    pub actual: HandCategory,
}

impl GuessOutcome {
    /// Checks if the player named the evaluated category.
    pub fn is_correct(&self) -> bool {
        self.guess == self.actual
    }
}

/// Single player round controller.
///
/// Owns the deck and its randomness source for the whole session, deals the
/// pocket and the board reveals, scores guesses against the evaluator, and
/// publishes a [GameState] snapshot after every transition.
///
/// The board grows by three cards after the first guess, then by one card for
/// each following guess. Once the guess on the full five cards board has been
/// scored the game is over until [Game::reset_game] is called.
#[derive(Debug)]
pub struct Game {
    rng: StdRng,
    deck: Deck,
    pocket: [Card; 2],
    board: Vec<Card>,
    stage: Stage,
    score: u32,
    state: GameState,
}

impl Game {
    /// Creates a game with operating system randomness.
    pub fn new() -> Result<Self, GameError> {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a game that replays the session for the given seed.
    pub fn with_seed(seed: u64) -> Result<Self, GameError> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a game with caller initialized randomness.
    pub fn with_rng(mut rng: StdRng) -> Result<Self, GameError> {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let pocket = Self::deal_pocket(&mut deck)?;
        let state = GameState::new(pocket, &[], 0, false);

        info!("hand started with pocket {} {}", pocket[0], pocket[1]);

        Ok(Self {
            rng,
            deck,
            pocket,
            board: Vec::with_capacity(BOARD_SIZE),
            stage: Stage::AwaitingGuess,
            score: 0,
            state,
        })
    }

    /// The observable game state for the current step.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Scores a hand category guess and advances the round.
    ///
    /// The guess is checked against the evaluated category of the pocket and
    /// board cards, a correct call scores [GUESS_REWARD], a wrong call leaves
    /// the score unchanged. The next board increment is then revealed, or the
    /// game ends if the board was full.
    ///
    /// Fails with [GameError::InvalidStateTransition] unless the controller
    /// is waiting for a guess.
    pub fn check_selected_hand(&mut self, guess: HandCategory) -> Result<GuessOutcome, GameError> {
        if self.stage != Stage::AwaitingGuess {
            return Err(GameError::InvalidStateTransition(self.stage));
        }

        let mut cards = self.pocket.to_vec();
        cards.extend_from_slice(&self.board);
        let actual = evaluate(&cards)?;

        let outcome = GuessOutcome { guess, actual };
        if outcome.is_correct() {
            self.score += GUESS_REWARD;
        }

        debug!("called {guess} against {actual}, score {}", self.score);

        match self.board.len() {
            0 => self.board.extend(self.deck.deal(3)?),
            3 | 4 => self.board.extend(self.deck.deal(1)?),
            BOARD_SIZE => {
                self.stage = Stage::GameOver;
                info!("game over with score {}", self.score);
            }
            n => panic!("board holds {n} cards"),
        }

        self.publish();
        Ok(outcome)
    }

    /// Restarts the game with a fresh deck, pocket, board, and score.
    ///
    /// Valid from any stage.
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        self.stage = Stage::Dealing;
        self.deck = Deck::new_and_shuffled(&mut self.rng);
        self.board.clear();
        self.score = 0;
        self.pocket = Self::deal_pocket(&mut self.deck)?;
        self.stage = Stage::AwaitingGuess;

        info!("hand started with pocket {} {}", self.pocket[0], self.pocket[1]);

        self.publish();
        Ok(())
    }

    fn deal_pocket(deck: &mut Deck) -> Result<[Card; 2], GameError> {
        let cards = deck.deal(POCKET_SIZE)?;

        // Sort cards for the UI.
        let (c1, c2) = (cards[0], cards[1]);
        Ok(if c1.rank() <= c2.rank() {
            [c1, c2]
        } else {
            [c2, c1]
        })
    }

    fn publish(&mut self) {
        self.state = GameState::new(
            self.pocket,
            &self.board,
            self.score,
            self.stage == Stage::GameOver,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The category the controller will score as correct for this step.
    fn oracle(game: &Game) -> HandCategory {
        let state = game.state();
        let mut cards = state.pocket().to_vec();
        cards.extend_from_slice(state.board());
        evaluate(&cards).unwrap()
    }

    /// A category the controller will score as wrong for this step.
    fn wrong_guess(game: &Game) -> HandCategory {
        let actual = oracle(game);
        HandCategory::categories().find(|c| *c != actual).unwrap()
    }

    #[test]
    fn correct_guess_scores_reward() {
        let mut game = Game::with_seed(7).unwrap();

        let outcome = game.check_selected_hand(oracle(&game)).unwrap();
        assert!(outcome.is_correct());
        assert_eq!(game.state().score(), GUESS_REWARD);
    }

    #[test]
    fn wrong_guess_leaves_score_unchanged() {
        let mut game = Game::with_seed(7).unwrap();

        let outcome = game.check_selected_hand(wrong_guess(&game)).unwrap();
        assert!(!outcome.is_correct());
        assert_eq!(game.state().score(), 0);

        // A wrong guess still reveals the flop.
        assert_eq!(game.state().board().len(), 3);
    }

    #[test]
    fn board_progression() {
        let mut game = Game::with_seed(11).unwrap();
        assert_eq!(game.state().board().len(), 0);

        for expected in [3, 4, 5] {
            game.check_selected_hand(oracle(&game)).unwrap();
            assert_eq!(game.state().board().len(), expected);
            assert!(!game.state().is_game_over());
        }

        // The board does not grow past five cards.
        game.check_selected_hand(oracle(&game)).unwrap();
        assert_eq!(game.state().board().len(), 5);
        assert!(game.state().is_game_over());
    }

    #[test]
    fn perfect_game_scores_every_step() {
        let mut game = Game::with_seed(23).unwrap();

        while !game.state().is_game_over() {
            game.check_selected_hand(oracle(&game)).unwrap();
        }

        assert_eq!(game.state().score(), 4 * GUESS_REWARD);
    }

    #[test]
    fn game_over_rejects_further_guesses() {
        let mut game = Game::with_seed(3).unwrap();

        while !game.state().is_game_over() {
            game.check_selected_hand(oracle(&game)).unwrap();
        }

        assert_eq!(game.stage(), Stage::GameOver);
        let err = game.check_selected_hand(HandCategory::Pair).unwrap_err();
        assert_eq!(err, GameError::InvalidStateTransition(Stage::GameOver));

        // The rejected call does not touch the game state.
        assert_eq!(game.state().board().len(), 5);
        assert!(game.state().is_game_over());
    }

    #[test]
    fn reset_restores_fresh_hand() {
        let mut game = Game::with_seed(5).unwrap();

        while !game.state().is_game_over() {
            game.check_selected_hand(oracle(&game)).unwrap();
        }

        game.reset_game().unwrap();

        let state = game.state();
        assert_eq!(game.stage(), Stage::AwaitingGuess);
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().len(), 0);
        assert_eq!(state.pocket().len(), 2);
        assert!(!state.is_game_over());

        // The new hand accepts guesses again.
        game.check_selected_hand(oracle(&game)).unwrap();
        assert_eq!(game.state().board().len(), 3);
    }

    #[test]
    fn session_never_repeats_a_card() {
        use ahash::HashSet;

        let mut game = Game::with_seed(29).unwrap();
        while !game.state().is_game_over() {
            game.check_selected_hand(oracle(&game)).unwrap();
        }

        let state = game.state();
        let ids = state
            .pocket()
            .iter()
            .chain(state.board())
            .map(Card::id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn snapshot_offers_all_categories_strongest_first() {
        let game = Game::with_seed(1).unwrap();

        let choices = game.state().choices();
        assert_eq!(choices.len(), 9);
        assert_eq!(choices[0], HandCategory::StraightFlush);
        assert_eq!(choices[8], HandCategory::HighCard);
        assert!(choices.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn pocket_is_sorted_by_rank() {
        for seed in 0..20 {
            let game = Game::with_seed(seed).unwrap();
            let pocket = game.state().pocket();
            assert!(pocket[0].rank() <= pocket[1].rank());
        }
    }

    #[test]
    fn same_seed_replays_same_session() {
        let mut g1 = Game::with_seed(42).unwrap();
        let mut g2 = Game::with_seed(42).unwrap();

        assert_eq!(g1.state().pocket(), g2.state().pocket());

        while !g1.state().is_game_over() {
            let o1 = g1.check_selected_hand(oracle(&g1)).unwrap();
            let o2 = g2.check_selected_hand(oracle(&g2)).unwrap();
            assert_eq!(o1, o2);
            assert_eq!(g1.state().board(), g2.state().board());
        }
    }
}
