//! Read-only view of a game for presentation layers.

use crate::participant::Participant;

use super::{Game, GameState};

/// A copy of everything a table view needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    /// The player.
    pub player: Participant,
    /// The dealer.
    pub dealer: Participant,
    /// Cards left in the shoe.
    pub num_cards_left: usize,
    /// Whether a round is in progress.
    pub round_active: bool,
    /// Whether a round has ever been dealt.
    pub game_is_initialised: bool,
    /// Stake applied at the next settlement.
    pub current_bet: u32,
    /// Whether the player won the last settled round.
    pub player_is_winner: bool,
    /// Round lifecycle state.
    pub state: GameState,
}

impl Game {
    /// Returns a snapshot of the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player: self.player.clone(),
            dealer: self.dealer.clone(),
            num_cards_left: self.shoe.num_cards_left(),
            round_active: self.round_active(),
            game_is_initialised: self.game_is_initialised,
            current_bet: self.current_bet,
            player_is_winner: self.player_is_winner,
            state: self.state,
        }
    }
}
