use core::str::FromStr;

use tracing::debug;

use crate::error::{ParseActionError, RoundError};

use super::{Draw, Round, RoundState};

/// A decision the player makes during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Keep the current score and hand over to the dealer.
    Stand,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `h`/`hit` or `s`/`stand`, ignoring case and surrounding
    /// whitespace.
    ///
    /// ```
    /// use bjsolo::Action;
    ///
    /// assert_eq!(" Hit\n".parse::<Action>(), Ok(Action::Hit));
    /// assert_eq!("s".parse::<Action>(), Ok(Action::Stand));
    /// assert!("double".parse::<Action>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(Self::Hit),
            "s" | "stand" => Ok(Self::Stand),
            _ => Err(ParseActionError(input.trim().to_owned())),
        }
    }
}

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round as a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Draw, RoundError> {
        self.ensure_player_turn()?;

        let draw = Self::draw_for(&mut self.player, &mut self.deck);
        debug!(target: "round.player", card = %draw.card, score = draw.score, "player hits");

        self.check_player_bust();
        Ok(draw)
    }

    /// Player action: Stand (end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn()?;

        debug!(target: "round.player", score = self.player.score(), "player stands");
        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Applies `action`, returning the dealt card for a hit.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn act(&mut self, action: Action) -> Result<Option<Draw>, RoundError> {
        match action {
            Action::Hit => self.hit().map(Some),
            Action::Stand => self.stand().map(|()| None),
        }
    }
}
