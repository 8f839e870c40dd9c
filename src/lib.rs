//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the hands, the turn phase,
//! and the draw source, and drives a presentation layer through an ordered
//! [`Event`] queue. The engine guarantees ordering but never timing: it does
//! not sleep, block, or render, so a front end can pace card animations
//! however it likes by draining events and stepping the dealer's turn at its
//! own rhythm.
//!
//! # Example
//!
//! ```
//! use bjtable::{DealerStep, Game, GamePhase};
//!
//! let mut game = Game::new(42);
//! game.start_new_game();
//!
//! while let Some(event) = game.next_event() {
//!     // hand each event to the animator
//!     let _ = event;
//! }
//!
//! game.stand().unwrap();
//! while game.phase() == GamePhase::DealerTurn {
//!     // a real front end would schedule each step with a delay
//!     let _ = game.advance_dealer_turn().unwrap();
//! }
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
pub mod event;
pub mod game;
pub mod hand;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::CommandError;
pub use event::{Event, EventKind, Side};
pub use game::{DEALER_STAND_TOTAL, DealerStep, Game, GamePhase};
pub use hand::{DealerHand, Hand, MAX_HAND_CARDS, hand_value, is_soft};
pub use result::{Outcome, RoundSummary};
pub use shoe::Shoe;
