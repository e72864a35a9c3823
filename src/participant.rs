//! Per-participant state shared by the player and the dealer.

use crate::card::Card;
use crate::hand::Hand;

/// Participant status within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParticipantStatus {
    /// Still taking cards.
    #[default]
    Ready,
    /// Stood on the current hand.
    Stick,
    /// Hand total went over 21.
    Bust,
}

/// A player or the dealer.
///
/// The score carries across rounds; everything else is reset when a new
/// round is dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Participant {
    status: ParticipantStatus,
    score: i64,
    hand: Hand,
    show_hand: bool,
}

impl Participant {
    /// Creates a participant with an empty hand and the given score.
    #[must_use]
    pub const fn new(score: i64) -> Self {
        Self {
            status: ParticipantStatus::Ready,
            score,
            hand: Hand::new(),
            show_hand: false,
        }
    }

    /// Adds a card to the hand, marking the participant bust if the total
    /// goes over 21.
    ///
    /// A card that keeps the total at or under 21 leaves the status alone.
    pub fn give_card(&mut self, card: Card) {
        self.hand.add_card(card);
        if self.hand.is_bust() {
            self.status = ParticipantStatus::Bust;
        }
    }

    /// Clears the hand, hides it and sets the status back to ready.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
        self.show_hand = false;
        self.status = ParticipantStatus::Ready;
    }

    /// Sets the score.
    pub const fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    /// Sets the status.
    pub const fn set_status(&mut self, status: ParticipantStatus) {
        self.status = status;
    }

    /// Sets whether the hand may be shown.
    pub const fn set_show_hand(&mut self, show_hand: bool) {
        self.show_hand = show_hand;
    }

    /// Shows the hand and turns every card face up.
    pub fn reveal_hand(&mut self) {
        self.hand.reveal();
        self.show_hand = true;
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> ParticipantStatus {
        self.status
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns whether the hand may be shown.
    #[must_use]
    pub const fn show_hand(&self) -> bool {
        self.show_hand
    }

    /// Returns whether the participant is done for the round.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(
            self.status,
            ParticipantStatus::Stick | ParticipantStatus::Bust
        )
    }

    /// Returns whether the hand is a five-card Charlie.
    #[must_use]
    pub fn has_five_card_charlie(&self) -> bool {
        self.status != ParticipantStatus::Bust && self.hand.is_five_card_charlie()
    }

    /// Returns the total others may see: the full total once the hand is
    /// shown, otherwise only the face-up cards.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.show_hand {
            self.hand.total_value()
        } else {
            self.hand.face_up_value()
        }
    }
}

impl Default for Participant {
    fn default() -> Self {
        Self::new(0)
    }
}
