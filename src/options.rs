//! Game configuration options.

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcharlie::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_default_bet(25)
///     .with_starting_score(100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks merged into the shoe.
    pub decks: u8,
    /// Stake applied at settlement until the bet is changed.
    pub default_bet: u32,
    /// Score the player and dealer start the session with.
    pub starting_score: i64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            default_bet: 10,
            starting_score: 0,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcharlie::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the stake used until [`Game::set_current_bet`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcharlie::GameOptions;
    ///
    /// let options = GameOptions::default().with_default_bet(50);
    /// assert_eq!(options.default_bet, 50);
    /// ```
    ///
    /// [`Game::set_current_bet`]: crate::Game::set_current_bet
    #[must_use]
    pub const fn with_default_bet(mut self, bet: u32) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets the starting score.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcharlie::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_score(500);
    /// assert_eq!(options.starting_score, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_score(mut self, score: i64) -> Self {
        self.starting_score = score;
        self
    }
}
