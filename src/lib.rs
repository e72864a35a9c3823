//! A blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] session that owns a cut multi-deck
//! [`Shoe`], a player and the dealer, and runs each round from the deal
//! through the player's turn to the dealer's draw and settlement. Hands are
//! totalled by plain addition, a hand over 21 is bust, and five cards
//! without busting win outright.
//!
//! # Example
//!
//! ```
//! use bjcharlie::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_decks(2), 42);
//! game.start_new_round().unwrap();
//! game.set_player_sticks().unwrap();
//! assert!(!game.round_active());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{CUT_PER_DECK, Card, DECK_SIZE, Suit};
pub use error::{ActionError, DealError, ShowdownError};
pub use game::{Game, GameSnapshot, GameState};
pub use hand::{BUST_LIMIT, CHARLIE_CARDS, Hand};
pub use options::GameOptions;
pub use participant::{Participant, ParticipantStatus};
pub use result::{RoundOutcome, RoundResult};
pub use shoe::{DrawResult, Shoe};
