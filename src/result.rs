//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RoundOutcome {
    /// Player went over 21; the dealer never draws.
    PlayerBust,
    /// Player holds five or more cards without busting; the dealer never draws.
    FiveCardCharlie,
    /// Dealer went over 21 while chasing the player's total.
    DealerBust,
    /// Dealer beat the player's total without busting.
    DealerWins,
}

impl RoundOutcome {
    /// Returns whether the outcome is a win for the player.
    #[must_use]
    pub const fn player_wins(self) -> bool {
        matches!(self, Self::FiveCardCharlie | Self::DealerBust)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The stake applied.
    pub stake: u32,
    /// Change to the player's score (positive = win, negative = loss).
    pub net: i64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the dealer drew after the deal.
    pub dealer_drawn: Vec<Card>,
}
