use alloc::vec::Vec;

use tracing::debug;

use crate::error::ShowdownError;
use crate::participant::ParticipantStatus;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Ends the round: the dealer plays if needed and the bet is settled.
    ///
    /// This normally runs on its own once the player sticks or busts. Called
    /// during the player's turn it settles as if the player had stood.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn end_round(&mut self) -> Result<RoundResult, ShowdownError> {
        if !matches!(self.state, GameState::PlayerTurn | GameState::DealerTurn) {
            return Err(ShowdownError::InvalidState);
        }

        self.state = GameState::DealerTurn;
        Ok(self.settle())
    }

    /// Settles the round in dealer-turn state.
    ///
    /// Order matters: a bust player loses before a five-card Charlie is
    /// considered, and the dealer only draws when neither applies. The dealer
    /// must beat the player's total, so it draws towards one more than it.
    pub(super) fn settle(&mut self) -> RoundResult {
        let player_value = self.player.hand().total_value();
        let mut dealer_drawn = Vec::new();

        let outcome = if self.player.status() == ParticipantStatus::Bust {
            RoundOutcome::PlayerBust
        } else if self.player.has_five_card_charlie() {
            RoundOutcome::FiveCardCharlie
        } else {
            let target = player_value.saturating_add(1);
            let draw = self
                .shoe
                .draw_until(self.dealer.hand().total_value(), target);

            for &card in &draw.drawn_cards {
                self.dealer.give_card(card);
            }
            debug_assert_eq!(self.dealer.hand().total_value(), draw.hand_value);

            self.dealer.reveal_hand();
            self.dealer.set_status(if draw.is_bust {
                ParticipantStatus::Bust
            } else {
                ParticipantStatus::Stick
            });
            dealer_drawn = draw.drawn_cards;

            if draw.is_bust {
                RoundOutcome::DealerBust
            } else {
                RoundOutcome::DealerWins
            }
        };

        let stake = i64::from(self.current_bet);
        let net = if outcome.player_wins() { stake } else { -stake };

        self.player.set_score(self.player.score() + net);
        self.player_is_winner = outcome.player_wins();
        self.state = GameState::Settled;

        let result = RoundResult {
            outcome,
            stake: self.current_bet,
            net,
            player_value,
            dealer_value: self.dealer.hand().total_value(),
            dealer_drawn,
        };

        debug!(
            ?outcome,
            net,
            score = self.player.score(),
            dealer_value = result.dealer_value,
            "round settled"
        );

        self.round_result = Some(result.clone());
        result
    }
}
