//! Game pacing options.

/// Pacing options for a game.
///
/// The engine owns no timers. Each deferred step is handed back to the
/// caller as a [`Scheduled`](crate::Scheduled) task carrying one of these
/// delays, and the embedding view decides how to wait it out. The delays
/// are cosmetic pacing, not game rules.
///
/// ```
/// use c8rs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_deal_delay_ms(250)
///     .with_think_delay_ms(800);
/// assert_eq!(options.deal_delay_ms, 250);
/// assert_eq!(options.think_delay_ms, 800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Delay before a pending deal completes, in milliseconds.
    pub deal_delay_ms: u64,
    /// Delay before the opponent's scheduled move runs, in milliseconds.
    pub think_delay_ms: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deal_delay_ms: 500,
            think_delay_ms: 1500,
        }
    }
}

impl GameOptions {
    /// Sets the dealing delay in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_delay_ms(0);
    /// assert_eq!(options.deal_delay_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_deal_delay_ms(mut self, delay_ms: u64) -> Self {
        self.deal_delay_ms = delay_ms;
        self
    }

    /// Sets the opponent think delay in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_think_delay_ms(2000);
    /// assert_eq!(options.think_delay_ms, 2000);
    /// ```
    #[must_use]
    pub const fn with_think_delay_ms(mut self, delay_ms: u64) -> Self {
        self.think_delay_ms = delay_ms;
        self
    }
}
