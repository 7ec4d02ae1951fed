use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::errors::WarError;

/// War value of a Joker; beats every standard rank.
pub const JOKER_VALUE: u8 = 14;

/// Suit label that turns a row into a Joker.
pub const JOKER_SUIT: &str = "Joker";

/// Rank of a standard card. Aces are low in War, so Ace is 1 and King is 13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return None,
        };
        Some(rank)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Display name: face cards and the Ace by name, everything else by numeral.
    pub fn name(self) -> String {
        match self {
            Rank::Ace => "Ace".to_string(),
            Rank::Jack => "Jack".to_string(),
            Rank::Queen => "Queen".to_string(),
            Rank::King => "King".to_string(),
            other => other.value().to_string(),
        }
    }
}

/// A single card as read from the input deck.
///
/// Only [`Card::war_value`] takes part in round comparisons; the suit is a
/// free-form label carried for display.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// A ranked card of any suit
    Standard { suit: String, rank: Rank },
    /// A Joker; the label is the second CSV field (e.g. "Red") and is never parsed
    Joker { label: String },
}

impl Card {
    pub fn new(suit: impl Into<String>, rank: Rank) -> Self {
        Card::Standard {
            suit: suit.into(),
            rank,
        }
    }

    pub fn joker(label: impl Into<String>) -> Self {
        Card::Joker {
            label: label.into(),
        }
    }

    /// Builds a card from the two CSV fields.
    ///
    /// A suit of "Joker" (any case) always yields a Joker; otherwise `token`
    /// must be an integer between 1 and 13.
    ///
    /// # Examples
    ///
    /// ```
    /// use warsim_engine::cards::{Card, Rank};
    ///
    /// let king = Card::parse("Hearts", "13").unwrap();
    /// assert_eq!(king, Card::new("Hearts", Rank::King));
    /// assert_eq!(Card::parse("joker", "Red").unwrap().war_value(), 14);
    /// assert!(Card::parse("Spades", "14").is_err());
    /// ```
    pub fn parse(suit: &str, token: &str) -> Result<Card, WarError> {
        let suit = suit.trim();
        let token = token.trim();
        if suit.eq_ignore_ascii_case(JOKER_SUIT) {
            return Ok(Card::joker(token));
        }
        token
            .parse::<u8>()
            .ok()
            .and_then(Rank::from_u8)
            .map(|rank| Card::new(suit, rank))
            .ok_or_else(|| WarError::Parse {
                token: token.to_string(),
            })
    }

    pub fn war_value(&self) -> u8 {
        match self {
            Card::Standard { rank, .. } => rank.value(),
            Card::Joker { .. } => JOKER_VALUE,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker { .. })
    }

    /// Compares two cards the way a round does: by war value alone.
    pub fn cmp_war(&self, other: &Card) -> Ordering {
        self.war_value().cmp(&other.war_value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { suit, rank } => write!(f, "{} of {}", rank.name(), suit),
            Card::Joker { .. } => f.write_str(JOKER_SUIT),
        }
    }
}

/// Joins display names in play order, as stored in round records.
pub fn display_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
