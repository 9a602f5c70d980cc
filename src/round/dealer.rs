use tracing::debug;

use crate::error::RoundError;
use crate::result::Outcome;

use super::{Draw, Round, RoundState};

impl Round {
    /// Score the dealer keeps drawing towards.
    ///
    /// This is the configured minimum, raised to the player's score so the
    /// dealer never stops while behind.
    #[must_use]
    pub fn dealer_threshold(&self) -> u32 {
        self.options
            .minimum_dealer_score
            .max(self.player.score())
    }

    /// Dealer plays their hand and the round is resolved.
    ///
    /// The dealer draws while their score is below
    /// [`dealer_threshold`](Self::dealer_threshold). A dealer bust is a win
    /// for the player; otherwise the player wins only with a strictly
    /// higher score, so ties go to the dealer.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Draw>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let threshold = self.dealer_threshold();
        let mut drawn = Vec::new();

        while self.dealer.score() < threshold {
            let draw = Self::draw_for(&mut self.dealer, &mut self.deck);
            debug!(target: "round.dealer", card = %draw.card, score = draw.score, threshold, "dealer draws");
            drawn.push(draw);

            if self.dealer.is_bust(self.options.maximum_score) {
                self.resolve(Outcome::Win);
                return Ok(drawn);
            }
        }

        let outcome = if self.player.score() > self.dealer.score() {
            Outcome::Win
        } else {
            Outcome::Loss
        };
        self.resolve(outcome);

        Ok(drawn)
    }
}
