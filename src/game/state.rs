//! Game state types.

/// Round lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    Idle,
    /// Dealing the opening hands.
    Dealing,
    /// Waiting for the player to hit or stick.
    PlayerTurn,
    /// Dealer plays out their hand and the round is settled.
    DealerTurn,
    /// Round has been settled; a new one can be dealt.
    Settled,
}

impl GameState {
    /// Returns whether a round is in progress.
    #[must_use]
    pub const fn is_round_active(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn | Self::DealerTurn)
    }
}
