//! Round configuration options.

/// Highest score a hand can hold without going bust.
pub const MAXIMUM_SCORE: u32 = 21;

/// Score the dealer keeps drawing towards.
pub const MINIMUM_DEALER_SCORE: u32 = 17;

/// Thresholds used to resolve a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_maximum_score(31)
///     .with_minimum_dealer_score(27);
/// assert_eq!(options.maximum_score, 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Scores above this are bust.
    pub maximum_score: u32,
    /// The dealer draws while below this (or below the player's score,
    /// whichever is higher).
    pub minimum_dealer_score: u32,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            maximum_score: MAXIMUM_SCORE,
            minimum_dealer_score: MINIMUM_DEALER_SCORE,
        }
    }
}

impl RoundOptions {
    /// Sets the bust threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_maximum_score(25);
    /// assert_eq!(options.maximum_score, 25);
    /// ```
    #[must_use]
    pub const fn with_maximum_score(mut self, maximum: u32) -> Self {
        self.maximum_score = maximum;
        self
    }

    /// Sets the minimum dealer score.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_minimum_dealer_score(16);
    /// assert_eq!(options.minimum_dealer_score, 16);
    /// ```
    #[must_use]
    pub const fn with_minimum_dealer_score(mut self, minimum: u32) -> Self {
        self.minimum_dealer_score = minimum;
        self
    }
}
