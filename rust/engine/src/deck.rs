use std::collections::VecDeque;

use crate::cards::Card;

/// One player's holding: cards are drawn from the front and won cards go to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Draws up to `n` cards; fewer are returned when the deck runs out.
    pub fn draw_up_to(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn add_all_to_bottom<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// War values in deck order. Play never looks past values, so two decks
    /// with equal fingerprints play out identically.
    pub fn fingerprint(&self) -> Vec<u8> {
        self.cards.iter().map(Card::war_value).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().cloned().collect()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
