//! Game engine and state management.

use tracing::debug;

use crate::error::ActionError;
use crate::options::GameOptions;
use crate::participant::Participant;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod snapshot;
pub mod state;

pub use snapshot::GameSnapshot;
pub use state::GameState;

/// A blackjack game session: one shoe, one player and the dealer.
///
/// The session owns every piece of mutable state and changes it only through
/// its commands. Each command runs to completion before returning, so a batch
/// of cards dealt by one command can never observe a half-updated shoe.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Current round state.
    state: GameState,
    player: Participant,
    dealer: Participant,
    /// Stake applied at the next settlement.
    current_bet: u32,
    player_is_winner: bool,
    /// Set once the first round has been dealt.
    game_is_initialised: bool,
    /// Result of the last settled round.
    round_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcharlie::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default().with_decks(1), 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// assert_eq!(game.num_cards_left(), 42);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            shoe: Shoe::new(options.decks, seed),
            state: GameState::Idle,
            player: Participant::new(options.starting_score),
            dealer: Participant::new(options.starting_score),
            current_bet: options.default_bet,
            player_is_winner: false,
            game_is_initialised: false,
            round_result: None,
        }
    }

    /// Creates a game over `deck_count` decks with default options.
    #[must_use]
    pub fn with_decks(deck_count: u8, seed: u64) -> Self {
        Self::new(GameOptions::default().with_decks(deck_count), seed)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, for stacking a known card order.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn num_cards_left(&self) -> usize {
        self.shoe.num_cards_left()
    }

    /// Returns whether a round is in progress.
    #[must_use]
    pub const fn round_active(&self) -> bool {
        self.state.is_round_active()
    }

    /// Returns whether a round has ever been dealt.
    #[must_use]
    pub const fn game_is_initialised(&self) -> bool {
        self.game_is_initialised
    }

    /// Returns the stake applied at the next settlement.
    #[must_use]
    pub const fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Returns whether the player won the last settled round.
    #[must_use]
    pub const fn player_is_winner(&self) -> bool {
        self.player_is_winner
    }

    /// Returns the result of the last settled round.
    ///
    /// Cleared when a new round is dealt.
    #[must_use]
    pub const fn round_result(&self) -> Option<&RoundResult> {
        self.round_result.as_ref()
    }

    /// Reshuffles the shoe between rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ActionError> {
        if self.round_active() {
            return Err(ActionError::InvalidState);
        }

        self.shoe.reshuffle();
        Ok(())
    }

    /// Starts the session over: fresh shoe, starting scores, no round.
    ///
    /// The current bet is kept.
    pub fn reset(&mut self) {
        self.shoe.init_deck();
        self.player = Participant::new(self.options.starting_score);
        self.dealer = Participant::new(self.options.starting_score);
        self.state = GameState::Idle;
        self.player_is_winner = false;
        self.game_is_initialised = false;
        self.round_result = None;
        debug!("game reset");
    }
}
