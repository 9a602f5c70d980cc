//! Round result types.

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts, or dealer has an equal or higher score).
    Loss,
}

/// Summary of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u32,
    /// The dealer's final score.
    pub dealer_score: u32,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
