//! Deck loading from the headerless `suit,rank` CSV format.
//!
//! Cards are dealt alternately in file order: the first card goes to player A,
//! the second to player B, and so on. When the file holds an odd number of
//! cards the trailing one is discarded so both players start with equal decks.

use std::path::Path;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::WarError;

const UTF8_BOM: char = '\u{feff}';

/// Parses every card row of `text`, in file order.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, WarError> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let mut cards = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        cards.push(parse_row(line, idx + 1)?);
    }
    Ok(cards)
}

fn parse_row(line: &str, line_no: usize) -> Result<Card, WarError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 2 {
        return Err(WarError::MalformedRow {
            line: line_no,
            reason: format!("expected 2 fields (suit,rank), found {}", fields.len()),
        });
    }
    let (suit, token) = (fields[0].trim(), fields[1].trim());
    if suit.is_empty() || token.is_empty() {
        return Err(WarError::MalformedRow {
            line: line_no,
            reason: "suit and rank must not be empty".to_string(),
        });
    }
    Card::parse(suit, token).map_err(|e| WarError::MalformedRow {
        line: line_no,
        reason: e.to_string(),
    })
}

/// Both starting decks, plus the unpaired card left out of an odd-sized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub player_a: Deck,
    pub player_b: Deck,
    pub discarded: Option<Card>,
}

impl Deal {
    pub fn into_decks(self) -> (Deck, Deck) {
        (self.player_a, self.player_b)
    }
}

/// Deals parsed cards alternately into two decks, setting aside an unpaired last card.
pub fn deal(mut cards: Vec<Card>) -> Deal {
    let discarded = if cards.len() % 2 == 1 { cards.pop() } else { None };
    if let Some(card) = &discarded {
        tracing::debug!(%card, "odd number of cards in input; trailing card discarded");
    }
    let mut player_a = Deck::new();
    let mut player_b = Deck::new();
    for (i, card) in cards.into_iter().enumerate() {
        if i % 2 == 0 {
            player_a.add_to_bottom(card);
        } else {
            player_b.add_to_bottom(card);
        }
    }
    Deal {
        player_a,
        player_b,
        discarded,
    }
}

/// Parses `text` and deals it, keeping track of a discarded trailing card.
///
/// # Errors
///
/// - [`WarError::MalformedRow`] for a row without exactly two fields or with a bad rank
/// - [`WarError::EmptyInput`] when no card rows are present
pub fn parse_deal(text: &str) -> Result<Deal, WarError> {
    let cards = parse_cards(text)?;
    if cards.is_empty() {
        return Err(WarError::EmptyInput);
    }
    tracing::debug!(cards = cards.len(), "parsed input deck");
    Ok(deal(cards))
}

/// Parses `text` and deals it into decks for players A and B.
///
/// # Errors
///
/// See [`parse_deal`].
///
/// # Examples
///
/// ```
/// use warsim_engine::loader::parse_decks;
///
/// let (a, b) = parse_decks("Hearts,1\nSpades,2\nClubs,3\n").unwrap();
/// assert_eq!(a.len(), 1);
/// assert_eq!(b.len(), 1);
/// ```
pub fn parse_decks(text: &str) -> Result<(Deck, Deck), WarError> {
    parse_deal(text).map(Deal::into_decks)
}

/// Reads and deals the deck stored at `path`.
pub fn load_decks<P: AsRef<Path>>(path: P) -> Result<(Deck, Deck), WarError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| WarError::File {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_decks(&text)
}
