use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::participant::ParticipantStatus;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Hands over to the dealer and settles once the player is done.
    ///
    /// Runs after every command that can change the player's status, so a
    /// bust from a hit ends the round just like an explicit stick.
    fn settle_if_player_done(&mut self) {
        if !self.player.is_done() {
            return;
        }

        debug!(status = ?self.player.status(), "player turn over");
        self.state = GameState::DealerTurn;
        self.settle();
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 marks the player bust and settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn give_player_a_card(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.shoe.get_next_card();
        self.player.give_card(card);
        self.settle_if_player_done();

        Ok(card)
    }

    /// Player action: Stick (stand on the current hand).
    ///
    /// The dealer then plays and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn set_player_sticks(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player.set_status(ParticipantStatus::Stick);
        self.settle_if_player_done();

        Ok(())
    }
}
