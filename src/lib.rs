//! A single-player blackjack round against a scripted dealer.
//!
//! The crate provides a [`Round`] type that runs the round flow: the
//! opening deal, the player's hits and stand, the dealer's turn, and the
//! final comparison.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Action, Round, RoundOptions};
//!
//! let mut round = Round::new(RoundOptions::default());
//! let result = round.play(|_| Action::Stand).unwrap();
//! let _ = result.outcome;
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod player;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, ParseActionError, RoundError};
pub use options::{MAXIMUM_SCORE, MINIMUM_DEALER_SCORE, RoundOptions};
pub use player::Player;
pub use result::{Outcome, RoundResult};
pub use round::{Action, Draw, OpeningDeal, Round, RoundState};
