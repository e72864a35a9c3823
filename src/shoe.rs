//! The live shoe that cards are dealt from.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{self, Card};
use crate::hand::BUST_LIMIT;

/// Outcome of [`Shoe::draw_until`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DrawResult {
    /// Cards drawn, in draw order.
    pub drawn_cards: Vec<Card>,
    /// The running total after the last draw.
    pub hand_value: u8,
    /// Whether the running total went over 21.
    pub is_bust: bool,
}

/// A multi-deck shoe.
///
/// The shoe keeps the shuffled and cut sequence it was built from and a live
/// copy of it that shrinks as cards are dealt from the front. Running out of
/// cards is never an error: the next draw reshuffles the stored sequence, cuts
/// it again and carries on, so a reshuffled shoe holds `32` cards per deck.
#[derive(Debug, Clone)]
pub struct Shoe {
    deck_count: u8,
    /// The shoe as first shuffled and cut, the source for reshuffles.
    original: Vec<Card>,
    /// Cards still to be dealt, front first.
    live: VecDeque<Card>,
    dealt: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled and cut shoe of `deck_count` decks.
    ///
    /// A deck count of zero is raised to one.
    #[must_use]
    pub fn new(deck_count: u8, seed: u64) -> Self {
        let mut shoe = Self {
            deck_count: deck_count.max(1),
            original: Vec::new(),
            live: VecDeque::new(),
            dealt: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.init_deck();
        shoe
    }

    /// Regenerates, shuffles and cuts every card from scratch and resets the
    /// dealt counter.
    pub fn init_deck(&mut self) {
        self.original = card::init_shoe(self.deck_count, &mut self.rng);
        self.live = self.original.iter().copied().collect();
        self.dealt = 0;
        trace!(remaining = self.live.len(), "shoe initialised");
    }

    /// Shuffles a copy of the stored shoe and cuts it into a new live
    /// sequence.
    ///
    /// The stored shoe is never regenerated. Cards left in the previous live
    /// sequence are discarded.
    pub fn reshuffle(&mut self) {
        let mut cards = self.original.clone();
        card::shuffle(&mut cards, &mut self.rng);
        self.live = card::cut(cards, self.deck_count).into();
        trace!(remaining = self.live.len(), "shoe reshuffled");
    }

    /// Deals the front card, reshuffling first if the shoe is empty.
    pub fn get_next_card(&mut self) -> Card {
        loop {
            if let Some(card) = self.live.pop_front() {
                self.dealt += 1;
                return card;
            }
            self.reshuffle();
        }
    }

    /// Deals the next `count` cards as one batch.
    ///
    /// If the shoe holds fewer than `count` cards, all remaining cards come
    /// first, followed by cards from the front of a fresh reshuffle.
    pub fn get_next_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);

        while cards.len() < count {
            if self.live.is_empty() {
                self.reshuffle();
            }
            let take = (count - cards.len()).min(self.live.len());
            cards.extend(self.live.drain(..take));
        }

        self.dealt += count;
        cards
    }

    /// Draws cards one at a time onto `current_hand_value` until the total
    /// reaches `target` or goes over 21.
    ///
    /// No card is drawn when the starting total already satisfies either
    /// condition.
    pub fn draw_until(&mut self, current_hand_value: u8, target: u8) -> DrawResult {
        let mut hand_value = current_hand_value;
        let mut drawn_cards = Vec::new();

        while hand_value <= BUST_LIMIT && hand_value < target {
            let card = self.get_next_card();
            hand_value = hand_value.saturating_add(card.value);
            drawn_cards.push(card);
        }

        DrawResult {
            drawn_cards,
            hand_value,
            is_bust: hand_value > BUST_LIMIT,
        }
    }

    /// Replaces the live sequence with `cards`, dealt front first.
    ///
    /// The sequence is truncated to the size of the stored shoe. Dealing
    /// past the stacked cards reshuffles as usual.
    pub fn stack<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.live = cards.into_iter().take(self.original.len()).collect();
    }

    /// Returns the number of cards left in the live sequence.
    #[must_use]
    pub fn num_cards_left(&self) -> usize {
        self.live.len()
    }

    /// Returns the cards left in the live sequence, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.live.iter()
    }

    /// Returns the number of cards dealt since the last [`Shoe::init_deck`].
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.dealt
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Returns the size of the stored shoe, `42` cards per deck.
    #[must_use]
    pub fn original_len(&self) -> usize {
        self.original.len()
    }

    /// Returns the number of cards in a shoe straight after [`Shoe::init_deck`].
    #[must_use]
    pub const fn shoe_size(&self) -> usize {
        card::cut_shoe_size(self.deck_count)
    }
}
