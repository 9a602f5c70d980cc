//! Round controller and state management.

use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::RoundOptions;
use crate::player::Player;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::RoundState;

/// A card dealt during a round together with the drawer's new score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The card that was dealt.
    pub card: Card,
    /// Score after adding the card.
    pub score: u32,
}

/// Cards handed out before the player's first decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningDeal {
    /// The dealer's single face-up card.
    pub dealer: Draw,
    /// The player's two cards, in the order dealt.
    pub player: [Draw; 2],
}

/// One round of blackjack between a player and the dealer.
///
/// The round owns its deck and both participants. Drive it with
/// [`deal`](Self::deal), then [`hit`](Self::hit) or [`stand`](Self::stand)
/// until the player's turn ends, then [`dealer_play`](Self::dealer_play).
/// [`play`](Self::play) runs all of those steps with a decision callback.
///
/// # Example
///
/// ```
/// use bjsolo::{Action, Deck, Round, RoundOptions, RoundState};
///
/// let mut deck = Deck::with_seed(42);
/// deck.shuffle();
/// let mut round = Round::with_deck(RoundOptions::default(), deck);
/// let result = round
///     .play(|player| if player.score() < 15 { Action::Hit } else { Action::Stand })
///     .unwrap();
/// assert_eq!(round.state(), RoundState::Resolved);
/// assert_eq!(round.result(), Some(result));
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    options: RoundOptions,
    player: Player,
    dealer: Player,
    state: RoundState,
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    #[must_use]
    pub fn new(options: RoundOptions) -> Self {
        let mut deck = Deck::new();
        deck.shuffle();
        Self::with_deck(options, deck)
    }

    /// Creates a round that deals from `deck` as it is.
    ///
    /// The deck is not shuffled, which lets callers script the cards.
    #[must_use]
    pub const fn with_deck(options: RoundOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            player: Player::new(),
            dealer: Player::new(),
            state: RoundState::Setup,
            result: None,
        }
    }

    /// Deals one card to the dealer and two to the player.
    ///
    /// If the opening cards already bust the player (two aces), the round
    /// resolves immediately as a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have already been dealt.
    pub fn deal(&mut self) -> Result<OpeningDeal, RoundError> {
        if self.state != RoundState::Setup {
            return Err(RoundError::InvalidState);
        }

        let dealer = Self::draw_for(&mut self.dealer, &mut self.deck);
        let first = Self::draw_for(&mut self.player, &mut self.deck);
        let second = Self::draw_for(&mut self.player, &mut self.deck);
        debug!(
            target: "round.deal",
            dealer = %dealer.card,
            first = %first.card,
            second = %second.card,
            player_score = second.score,
            "opening cards dealt"
        );

        self.state = RoundState::PlayerTurn;
        self.check_player_bust();

        Ok(OpeningDeal {
            dealer,
            player: [first, second],
        })
    }

    fn draw_for(participant: &mut Player, deck: &mut Deck) -> Draw {
        let card = participant.draw(deck);
        Draw {
            card,
            score: participant.score(),
        }
    }

    /// Ends the round as a loss if the player has gone bust.
    fn check_player_bust(&mut self) {
        if self.player.is_bust(self.options.maximum_score) {
            self.resolve(Outcome::Loss);
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        let result = RoundResult {
            outcome,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            player_bust: self.player.is_bust(self.options.maximum_score),
            dealer_bust: self.dealer.is_bust(self.options.maximum_score),
        };
        info!(
            target: "round.resolve",
            outcome = ?result.outcome,
            player_score = result.player_score,
            dealer_score = result.dealer_score,
            "round resolved"
        );
        self.result = Some(result);
        self.state = RoundState::Resolved;
    }

    /// Plays the whole round, asking `decide` for each player action.
    ///
    /// Steps that have already happened are skipped, so a round that was
    /// dealt by hand can be finished with this method.
    ///
    /// # Errors
    ///
    /// Returns an error only if the round ends up in an inconsistent state,
    /// which the state machine rules out.
    pub fn play<F>(&mut self, mut decide: F) -> Result<RoundResult, RoundError>
    where
        F: FnMut(&Player) -> Action,
    {
        if self.state == RoundState::Setup {
            self.deal()?;
        }

        while self.state == RoundState::PlayerTurn {
            let action = decide(&self.player);
            self.act(action)?;
        }

        if self.state == RoundState::DealerTurn {
            self.dealer_play()?;
        }

        self.result.ok_or(RoundError::InvalidState)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the result once the round is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the deck being dealt from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }
}
