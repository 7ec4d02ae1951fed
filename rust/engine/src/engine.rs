use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::WarError;
use crate::player::Side;
use crate::pot::Pot;

/// Cards each player stakes when a war breaks out: two face down, one face up.
pub const WAR_ANTE: usize = 3;

/// Who took the pot at the end of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundWinner {
    Player(Side),
    /// Neither player could settle the war; the pot leaves play
    Draw,
}

/// One face-up comparison within a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub a: Card,
    pub b: Card,
}

impl Battle {
    pub fn leader(&self) -> Option<Side> {
        match self.a.cmp_war(&self.b) {
            Ordering::Greater => Some(Side::A),
            Ordering::Less => Some(Side::B),
            Ordering::Equal => None,
        }
    }
}

/// Everything that happened in a single round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundOutcome {
    pub winner: RoundWinner,
    /// The whole pot in play order; appended to the winner's deck, or discarded on a draw
    pub cards_won: Vec<Card>,
    /// Number of war escalations; 0 when the first comparison decided the round
    pub war_depth: u32,
    /// Face-up comparisons in the order they were made
    pub battles: Vec<Battle>,
    pub played_a: Vec<Card>,
    pub played_b: Vec<Card>,
    /// Players who could not ante a full war stake
    pub short_sides: Vec<Side>,
}

/// Plays one round between the two decks and moves the pot to the winner.
///
/// Both players reveal their top card; the higher war value takes every card
/// in the pot. Equal values start a war in which each player stakes
/// [`WAR_ANTE`] cards and the last of them is compared. A player unable to
/// stake a full war loses it; when both are short, their last cards decide
/// and a further tie is a [`RoundWinner::Draw`].
///
/// # Errors
///
/// [`WarError::InsufficientCards`] if either deck is empty on entry.
///
/// # Examples
///
/// ```
/// use warsim_engine::cards::{Card, Rank};
/// use warsim_engine::deck::Deck;
/// use warsim_engine::engine::{play_round, RoundWinner};
/// use warsim_engine::player::Side;
///
/// let mut a: Deck = [Card::new("Hearts", Rank::Ace)].into_iter().collect();
/// let mut b: Deck = [Card::new("Spades", Rank::Two)].into_iter().collect();
/// let outcome = play_round(&mut a, &mut b).unwrap();
/// assert_eq!(outcome.winner, RoundWinner::Player(Side::B));
/// assert!(a.is_empty());
/// assert_eq!(b.len(), 2);
/// ```
pub fn play_round(a: &mut Deck, b: &mut Deck) -> Result<RoundOutcome, WarError> {
    if a.is_empty() {
        return Err(WarError::InsufficientCards { side: Side::A });
    }
    if b.is_empty() {
        return Err(WarError::InsufficientCards { side: Side::B });
    }
    let (Some(mut up_a), Some(mut up_b)) = (a.draw(), b.draw()) else {
        return Err(WarError::InsufficientCards { side: Side::A });
    };

    let mut pot = Pot::new();
    pot.add(Side::A, up_a.clone());
    pot.add(Side::B, up_b.clone());
    let mut battles = Vec::new();
    let mut war_depth = 0u32;
    let mut short_sides = Vec::new();

    let winner = loop {
        let battle = Battle {
            a: up_a.clone(),
            b: up_b.clone(),
        };
        let leader = battle.leader();
        battles.push(battle);
        if let Some(side) = leader {
            break RoundWinner::Player(side);
        }

        war_depth += 1;
        let (left_a, left_b) = (a.len(), b.len());
        if left_a >= WAR_ANTE && left_b >= WAR_ANTE {
            match (
                ante(a, Side::A, WAR_ANTE, &mut pot),
                ante(b, Side::B, WAR_ANTE, &mut pot),
            ) {
                (Some(next_a), Some(next_b)) => {
                    up_a = next_a;
                    up_b = next_b;
                }
                _ => break RoundWinner::Draw,
            }
            tracing::trace!(war_depth, "war escalated");
            continue;
        }

        break match (left_a, left_b) {
            (0, 0) => {
                short_sides.extend([Side::A, Side::B]);
                RoundWinner::Draw
            }
            (0, _) => {
                short_sides.push(Side::A);
                RoundWinner::Player(Side::B)
            }
            (_, 0) => {
                short_sides.push(Side::B);
                RoundWinner::Player(Side::A)
            }
            (la, lb) if la < WAR_ANTE && lb < WAR_ANTE => {
                short_sides.extend([Side::A, Side::B]);
                match (
                    ante(a, Side::A, la, &mut pot),
                    ante(b, Side::B, lb, &mut pot),
                ) {
                    (Some(last_a), Some(last_b)) => {
                        let last = Battle {
                            a: last_a,
                            b: last_b,
                        };
                        let leader = last.leader();
                        battles.push(last);
                        leader.map_or(RoundWinner::Draw, RoundWinner::Player)
                    }
                    _ => RoundWinner::Draw,
                }
            }
            (la, _) if la < WAR_ANTE => {
                short_sides.push(Side::A);
                pot.add_all(Side::A, a.draw_up_to(la));
                RoundWinner::Player(Side::B)
            }
            (_, lb) => {
                short_sides.push(Side::B);
                pot.add_all(Side::B, b.draw_up_to(lb));
                RoundWinner::Player(Side::A)
            }
        };
    };

    let (cards_won, played_a, played_b) = pot.into_parts();
    match winner {
        RoundWinner::Player(Side::A) => a.add_all_to_bottom(cards_won.iter().cloned()),
        RoundWinner::Player(Side::B) => b.add_all_to_bottom(cards_won.iter().cloned()),
        RoundWinner::Draw => {
            tracing::debug!(discarded = cards_won.len(), "war could not be settled")
        }
    }

    Ok(RoundOutcome {
        winner,
        cards_won,
        war_depth,
        battles,
        played_a,
        played_b,
        short_sides,
    })
}

/// Moves up to `count` cards from `deck` into the pot and returns the last
/// of them, which is played face up.
fn ante(deck: &mut Deck, side: Side, count: usize, pot: &mut Pot) -> Option<Card> {
    let cards = deck.draw_up_to(count);
    let face_up = cards.last().cloned();
    pot.add_all(side, cards);
    face_up
}
