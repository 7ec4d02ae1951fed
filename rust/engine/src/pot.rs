use crate::cards::Card;
use crate::player::Side;

/// Cards at stake in the current round, kept in the order they were played.
#[derive(Debug, Clone, Default)]
pub struct Pot {
    cards: Vec<Card>,
    played_a: Vec<Card>,
    played_b: Vec<Card>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, side: Side, card: Card) {
        match side {
            Side::A => self.played_a.push(card.clone()),
            Side::B => self.played_b.push(card.clone()),
        }
        self.cards.push(card);
    }

    pub fn add_all(&mut self, side: Side, cards: Vec<Card>) {
        for card in cards {
            self.add(side, card);
        }
    }

    /// Splits the pot into (all cards in play order, A's cards, B's cards).
    pub fn into_parts(self) -> (Vec<Card>, Vec<Card>, Vec<Card>) {
        (self.cards, self.played_a, self.played_b)
    }
}
