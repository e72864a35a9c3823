use tracing::debug;

use crate::error::DealError;

use super::{Game, GameState};

/// Cards dealt at the start of a round: two to the player, two to the dealer.
const OPENING_CARDS: usize = 4;

impl Game {
    /// Sets the stake applied at the next settlement.
    ///
    /// Can be called at any time; a round already in progress settles with
    /// the new amount.
    pub const fn set_current_bet(&mut self, amount: u32) {
        self.current_bet = amount;
    }

    /// Deals a new round.
    ///
    /// The four opening cards are taken from the shoe as one batch in the
    /// order player, player, dealer, dealer. The dealer's second card is the
    /// hole card and is dealt face down. Scores carry over from the previous
    /// round; hands, statuses and visibility are reset.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_new_round(&mut self) -> Result<(), DealError> {
        if self.round_active() {
            return Err(DealError::RoundInProgress);
        }

        self.state = GameState::Dealing;
        self.player_is_winner = false;
        self.round_result = None;
        self.dealer.set_show_hand(false);

        let mut cards = self.shoe.get_next_cards(OPENING_CARDS).into_iter();

        self.player.reset_hand();
        for card in cards.by_ref().take(2) {
            self.player.give_card(card);
        }

        self.dealer.reset_hand();
        for (index, card) in cards.enumerate() {
            // Second dealer card is the hole card.
            let card = if index == 1 {
                card.turned_face_down()
            } else {
                card
            };
            self.dealer.give_card(card);
        }

        self.game_is_initialised = true;
        self.state = GameState::PlayerTurn;

        debug!(
            player_value = self.player.hand().total_value(),
            dealer_up = self.dealer.visible_value(),
            cards_left = self.shoe.num_cards_left(),
            "round dealt"
        );

        Ok(())
    }
}
