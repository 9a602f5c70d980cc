//! Error types for deck and round operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while building a deck in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly 52 cards.
    #[error("expected 52 cards, got {0}")]
    WrongSize(usize),
    /// A card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
}

/// Error returned when player input is not a recognised action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action `{0}`")]
pub struct ParseActionError(pub String);
