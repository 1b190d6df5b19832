// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// A scripted stand-in for the presentation collaborator, it reads the game
// snapshot, submits a guess, and resets between games.
//
// Run with:
//
// ```bash
// $ cargo r --example autoplay -- --games 5 --seed 42
// $ cargo r --example autoplay -- --random
// ```
use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

use handcall_core::{Game, evaluate};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of games to play.
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1000))]
    games: u32,
    /// Seed for a reproducible session.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Pick random guesses instead of evaluating the cards.
    #[clap(long)]
    random: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let mut rng = rand::rng();
    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(seed)?,
        None => Game::new()?,
    };

    for played in 1..=cli.games {
        while !game.state().is_game_over() {
            let state = game.state();
            let guess = if cli.random {
                *state.choices().choose(&mut rng).expect("nine choices")
            } else {
                let mut cards = state.pocket().to_vec();
                cards.extend_from_slice(state.board());
                evaluate(&cards)?
            };

            game.check_selected_hand(guess)?;
        }

        println!("game {played} final score {}", game.state().score());
        game.reset_game()?;
    }

    Ok(())
}
