// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcall playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use handcall_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(kd.to_string(), "KD");
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards for one game session:
//!
//! ```
//! # use handcall_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let cards = deck.deal(7)?;
//! assert_eq!(cards.len(), 7);
//! assert_eq!(deck.count(), 45);
//! # Ok::<(), handcall_cards::DeckError>(())
//! ```
//!
//! Every card also maps to a distinct visual asset identifier a presentation
//! layer can use to look up artwork:
//!
//! ```
//! # use handcall_cards::{Card, Rank, Suit};
//! let card = Card::new(Rank::Queen, Suit::Spades);
//! assert_eq!(card.asset_name(), "queen_of_spades");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};
