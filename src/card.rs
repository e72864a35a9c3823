//! Card types and deck utilities.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in deck generation order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Diamond, Self::Club, Self::Spade];
}

/// A playing card.
///
/// Cards are plain values. Turning a card over yields a new card rather than
/// mutating one already held by a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The counting value of the card (1..=10, face cards count 10).
    pub value: u8,
    /// The display rank ("1".."10", "J", "Q" or "K").
    pub label: &'static str,
    /// Whether the card is dealt face up.
    pub face_up: bool,
}

const LABELS: [&str; 13] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

impl Card {
    /// Creates a face-up card from a rank (1..=13, 11..=13 being J/Q/K).
    ///
    /// Ranks above 13 are treated as a king; a rank of 0 is treated as 1.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        let rank = match rank {
            0 => 1,
            14.. => 13,
            r => r,
        };
        let value = if rank > 10 { 10 } else { rank };

        Self {
            suit,
            value,
            label: LABELS[(rank - 1) as usize],
            face_up: true,
        }
    }

    /// Returns a face-down copy of this card.
    #[must_use]
    pub const fn turned_face_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// Returns a face-up copy of this card.
    #[must_use]
    pub const fn turned_face_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Cards removed from the bottom of the shoe per deck after each shuffle.
pub const CUT_PER_DECK: usize = 10;

/// Builds `deck_count` unshuffled decks, suit-major and ranks ascending.
#[must_use]
pub fn generate_decks(deck_count: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

    for _ in 0..deck_count {
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}

/// Shuffles the cards in place with a uniform Fisher–Yates permutation.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Drops the bottom [`CUT_PER_DECK`] cards per deck.
#[must_use]
pub fn cut(mut cards: Vec<Card>, deck_count: u8) -> Vec<Card> {
    let keep = cards
        .len()
        .saturating_sub(deck_count as usize * CUT_PER_DECK);
    cards.truncate(keep);
    cards
}

/// Returns the number of playable cards in a freshly cut shoe.
#[must_use]
pub const fn cut_shoe_size(deck_count: u8) -> usize {
    deck_count as usize * (DECK_SIZE - CUT_PER_DECK)
}

/// Generates, shuffles and cuts a new shoe.
#[must_use]
pub fn init_shoe<R: Rng + ?Sized>(deck_count: u8, rng: &mut R) -> Vec<Card> {
    let mut cards = generate_decks(deck_count);
    shuffle(&mut cards, rng);
    cut(cards, deck_count)
}
