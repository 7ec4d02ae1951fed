//! # warsim-engine: War Card Game Engine Core
//!
//! A deterministic simulator for the two-player card game War. Decks are read
//! in the order given, dealt alternately, and played until one player holds
//! every card or play is shown to cycle.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Card) and war-value ordering
//! - [`deck`] - A player's FIFO deck
//! - [`loader`] - CSV parsing and the alternating deal
//! - [`pot`] - Cards at stake in a round
//! - [`engine`] - Single round resolution, including wars
//! - [`game`] - Game loop, round records, and final result
//! - [`narrator`] - Injected sinks for play-by-play text
//! - [`recorder`] - Round records to CSV
//! - [`errors`] - Error types for loading and play
//!
//! ## Quick Start
//!
//! ```rust
//! use warsim_engine::game::{run_game, GameOptions, GameWinner};
//! use warsim_engine::loader::parse_decks;
//! use warsim_engine::narrator::SilentNarrator;
//! use warsim_engine::player::Side;
//!
//! let (a, b) = parse_decks("Hearts,1\nSpades,2\n").unwrap();
//! let result = run_game(a, b, &GameOptions::default(), &mut SilentNarrator).unwrap();
//! // Aces are low: the Two takes the only round
//! assert_eq!(result.winner, GameWinner::Player(Side::B));
//! ```
//!
//! ## Recording
//!
//! ```rust
//! use warsim_engine::game::{run_game, GameOptions};
//! use warsim_engine::loader::parse_decks;
//! use warsim_engine::recorder::write_csv;
//!
//! let (a, b) = parse_decks("Hearts,5\nSpades,3\n").unwrap();
//! let result = run_game(a, b, &GameOptions::default(), &mut Vec::<String>::new()).unwrap();
//! let mut csv = Vec::new();
//! write_csv(&mut csv, &result.rounds).unwrap();
//! assert!(String::from_utf8(csv).unwrap().starts_with("Round,PlayerA_Count"));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod loader;
pub mod narrator;
pub mod player;
pub mod pot;
pub mod recorder;

pub use errors::WarError;
