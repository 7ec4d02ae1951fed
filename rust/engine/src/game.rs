use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cards::display_cards;
use crate::deck::Deck;
use crate::engine::{play_round, RoundOutcome, RoundWinner, WAR_ANTE};
use crate::errors::WarError;
use crate::narrator::Narrator;
use crate::player::Side;

/// Per-round snapshot written to the results CSV.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u64,
    /// Player A's deck size after the round
    pub player_a_count: usize,
    /// Player B's deck size after the round
    pub player_b_count: usize,
    /// Every card player A put into the pot this round, in play order
    pub player_a_cards: String,
    /// Every card player B put into the pot this round, in play order
    pub player_b_cards: String,
}

/// Final result of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameWinner {
    Player(Side),
    Tie,
}

/// Why the game stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum EndReason {
    /// One player ran out of cards
    DeckExhausted,
    /// Both players ran out of cards after a drawn war
    BothExhausted,
    /// The same pair of decks came up twice, so play would cycle forever
    RepeatedPosition,
    /// The configured round limit was reached
    RoundLimit,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub rounds: Vec<RoundRecord>,
    pub winner: GameWinner,
    pub end: EndReason,
}

/// Knobs for [`run_game`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOptions {
    /// Stop after this many rounds; the player holding more cards wins
    pub max_rounds: Option<u64>,
    /// End the game as a tie when a position repeats
    pub detect_repeats: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_rounds: None,
            detect_repeats: true,
        }
    }
}

/// Plays rounds until a player runs out of cards, narrating each one.
///
/// # Examples
///
/// ```
/// use warsim_engine::game::{run_game, GameOptions, GameWinner};
/// use warsim_engine::loader::parse_decks;
/// use warsim_engine::player::Side;
///
/// let (a, b) = parse_decks("Hearts,13\nJoker,Red\n").unwrap();
/// let mut lines: Vec<String> = Vec::new();
/// let result = run_game(a, b, &GameOptions::default(), &mut lines).unwrap();
/// assert_eq!(result.winner, GameWinner::Player(Side::B));
/// assert_eq!(result.rounds.len(), 1);
/// ```
pub fn run_game(
    mut a: Deck,
    mut b: Deck,
    options: &GameOptions,
    narrator: &mut dyn Narrator,
) -> Result<GameResult, WarError> {
    narrator.narrate(&format!(
        "Starting War! Player A has {} cards, Player B has {} cards.",
        a.len(),
        b.len()
    ))?;

    let mut rounds: Vec<RoundRecord> = Vec::new();
    // positions keyed by war values only; suits never affect play
    let mut seen: HashSet<(Vec<u8>, Vec<u8>)> = HashSet::new();

    let (winner, end) = loop {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => break (GameWinner::Tie, EndReason::BothExhausted),
            (true, false) => break (GameWinner::Player(Side::B), EndReason::DeckExhausted),
            (false, true) => break (GameWinner::Player(Side::A), EndReason::DeckExhausted),
            (false, false) => {}
        }
        if options
            .max_rounds
            .is_some_and(|limit| rounds.len() as u64 >= limit)
        {
            break (leader_by_count(&a, &b), EndReason::RoundLimit);
        }
        if options.detect_repeats && !seen.insert((a.fingerprint(), b.fingerprint())) {
            narrator.narrate("The same position has come up again; play would never end.")?;
            break (GameWinner::Tie, EndReason::RepeatedPosition);
        }

        let round = rounds.len() as u64 + 1;
        let outcome = play_round(&mut a, &mut b)?;
        narrate_round(narrator, round, &outcome, &a, &b)?;
        tracing::debug!(
            round,
            war_depth = outcome.war_depth,
            pot = outcome.cards_won.len(),
            player_a = a.len(),
            player_b = b.len(),
            "round finished"
        );

        rounds.push(RoundRecord {
            round,
            player_a_count: a.len(),
            player_b_count: b.len(),
            player_a_cards: display_cards(&outcome.played_a),
            player_b_cards: display_cards(&outcome.played_b),
        });
    };

    narrator.narrate(&format!("Game Over after {} rounds.", rounds.len()))?;
    match winner {
        GameWinner::Player(side) => narrator.narrate(&format!("Player {} wins the game!", side))?,
        GameWinner::Tie => narrator.narrate("It's a Tie!")?,
    }
    tracing::info!(rounds = rounds.len(), ?winner, ?end, "game finished");

    Ok(GameResult {
        rounds,
        winner,
        end,
    })
}

fn leader_by_count(a: &Deck, b: &Deck) -> GameWinner {
    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Greater => GameWinner::Player(Side::A),
        std::cmp::Ordering::Less => GameWinner::Player(Side::B),
        std::cmp::Ordering::Equal => GameWinner::Tie,
    }
}

fn face_down(played: usize, staked_before: usize) -> usize {
    played.saturating_sub(staked_before + 1)
}

fn narrate_round(
    narrator: &mut dyn Narrator,
    round: u64,
    outcome: &RoundOutcome,
    a: &Deck,
    b: &Deck,
) -> std::io::Result<()> {
    narrator.narrate(&format!("Round {}", round))?;
    let last = outcome.battles.len().saturating_sub(1);
    // both sides played out their last cards face up
    let short_battle =
        outcome.short_sides.len() == 2 && outcome.battles.len() > outcome.war_depth as usize;
    for (i, battle) in outcome.battles.iter().enumerate() {
        if i > 0 && short_battle && i == last {
            // everything before this battle came from the opening card and full wars
            let staked_before = 1 + WAR_ANTE * (i - 1);
            narrator.narrate(&format!(
                "WAR #{}! Both players are short; Player A stakes {} and Player B stakes {} cards face down.",
                i,
                face_down(outcome.played_a.len(), staked_before),
                face_down(outcome.played_b.len(), staked_before)
            ))?;
        } else if i > 0 {
            narrator.narrate(&format!(
                "WAR #{}! Each player stakes {} cards face down.",
                i,
                WAR_ANTE - 1
            ))?;
        }
        narrator.narrate(&format!("Player A plays {}", battle.a))?;
        narrator.narrate(&format!("Player B plays {}", battle.b))?;
    }
    // a short side ends the war without a further face-up comparison
    if outcome.war_depth as usize >= outcome.battles.len() {
        narrator.narrate(&format!("WAR #{}!", outcome.war_depth))?;
    }
    for side in &outcome.short_sides {
        narrator.narrate(&format!(
            "Player {} does not have enough cards to finish the war.",
            side
        ))?;
    }
    match outcome.winner {
        RoundWinner::Player(side) => narrator.narrate(&format!(
            "Player {} wins round {} and takes {} cards.",
            side,
            round,
            outcome.cards_won.len()
        ))?,
        RoundWinner::Draw => narrator.narrate(&format!(
            "Round {} is a draw; {} cards leave play.",
            round,
            outcome.cards_won.len()
        ))?,
    }
    narrator.narrate(&format!(
        "Cards remaining: Player A {}, Player B {}",
        a.len(),
        b.len()
    ))
}
