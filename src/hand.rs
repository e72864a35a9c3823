//! Hand totals and the bust and five-card Charlie rules.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BUST_LIMIT: u8 = 21;

/// Number of cards that makes a non-bust hand a five-card Charlie.
pub const CHARLIE_CARDS: usize = 5;

/// A hand of cards and its running total.
///
/// The total is the plain sum of card values. Aces always count one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Sum of the card values.
    total_value: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total_value: 0,
        }
    }

    /// Adds a card to the hand and returns the new total.
    pub fn add_card(&mut self, card: Card) -> u8 {
        self.cards.push(card);
        self.total_value = self.total_value.saturating_add(card.value);
        self.total_value
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the sum of the card values.
    #[must_use]
    pub const fn total_value(&self) -> u8 {
        self.total_value
    }

    /// Returns the sum of the face-up card values.
    #[must_use]
    pub fn face_up_value(&self) -> u8 {
        self.cards
            .iter()
            .filter(|card| card.face_up)
            .fold(0, |total: u8, card| total.saturating_add(card.value))
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total_value > BUST_LIMIT
    }

    /// Returns whether the hand holds five or more cards without busting.
    #[must_use]
    pub fn is_five_card_charlie(&self) -> bool {
        self.cards.len() >= CHARLIE_CARDS && !self.is_bust()
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            *card = card.turned_face_up();
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total_value = 0;
    }
}
