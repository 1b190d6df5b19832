// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example frequencies
// Sampled hands    1000000
// High Card:       174192
// Pair:            438433
// Two Pair:        234619
// ...
// ```

use rand::prelude::*;

use handcall_eval::{Deck, HandCategory, evaluate};

const SAMPLES: usize = 1_000_000;

fn main() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut counts = [0usize; 9];

    for _ in 0..SAMPLES {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let cards = deck.deal(7).expect("a full deck deals 7 cards");
        let category = evaluate(&cards).expect("dealt cards are distinct");
        counts[category as usize] += 1;
    }

    println!("Sampled hands    {SAMPLES}");
    for category in HandCategory::categories() {
        println!("{:<16} {}", format!("{category}:"), counts[category as usize]);
    }
}
