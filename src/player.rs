//! Score accumulator shared by the player and the dealer.

use crate::card::Card;
use crate::deck::Deck;

/// A participant in a round.
///
/// The same type is used for the player and the dealer; only the round
/// controller treats them differently.
///
/// ```
/// use bjsolo::{Deck, Player};
///
/// let mut deck = Deck::with_seed(1);
/// let mut player = Player::new();
/// let card = player.draw(&mut deck);
/// assert_eq!(player.score(), u32::from(card.value()));
/// assert!(!player.is_bust(21));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player {
    score: u32,
}

impl Player {
    /// Creates a player with a score of zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { score: 0 }
    }

    /// Deals one card from `deck` and adds its value to the score.
    ///
    /// # Panics
    ///
    /// Panics if the deck is exhausted.
    pub fn draw(&mut self, deck: &mut Deck) -> Card {
        let card = deck.deal_next();
        self.score += u32::from(card.value());
        card
    }

    /// Returns the accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns whether the score exceeds `maximum`.
    #[must_use]
    pub const fn is_bust(&self, maximum: u32) -> bool {
        self.score > maximum
    }
}
