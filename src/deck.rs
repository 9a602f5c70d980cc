//! The 52-card deck and its dealing cursor.

use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single deck of 52 cards dealt front to back.
///
/// The deck owns the random number generator used to shuffle it, so two
/// decks never share state.
///
/// # Example
///
/// ```
/// use bjsolo::{Deck, DECK_SIZE};
///
/// let mut deck = Deck::with_seed(7);
/// deck.shuffle();
/// let _card = deck.deal_next();
/// assert_eq!(deck.remaining(), DECK_SIZE - 1);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck whose generator is seeded from the
    /// operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates an unshuffled deck with a deterministic generator.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cards: Self::ordered(),
            cursor: 0,
            rng,
        }
    }

    /// Cards in suit-major, rank-minor order.
    fn ordered() -> [Card; DECK_SIZE] {
        core::array::from_fn(|i| {
            Card::new(Rank::ALL[i % Rank::ALL.len()], Suit::ALL[i / Rank::ALL.len()])
        })
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// The deck is not shuffled; its generator is only used if
    /// [`shuffle`](Self::shuffle) is called later.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` holds each of the 52 cards exactly
    /// once.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in cards {
            let slot = &mut seen[card.ordinal()];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }

        let mut deck = Self::new();
        deck.cards.copy_from_slice(cards);
        Ok(deck)
    }

    /// Shuffles every card back into the deck and resets the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
    }

    /// Deals the next card.
    ///
    /// # Panics
    ///
    /// Panics if all 52 cards have already been dealt. A round never comes
    /// close to that, so running out is a bug in the caller.
    pub fn deal_next(&mut self) -> Card {
        assert!(self.cursor < DECK_SIZE, "ran out of cards to deal");
        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns all cards in dealing order, dealt or not.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
