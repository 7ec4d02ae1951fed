//! # War Simulator CLI Library
//!
//! Command-line front end for the `warsim-engine` crate: it reads a deck,
//! plays a full game of War, narrates it on stdout, and writes one CSV row
//! per round.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments, resolves configuration, and plays the game.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["war_game", "deck.csv", "rounds.csv"];
//! let code = warsim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Configuration
//!
//! - `WARSIM_CONFIG`: TOML file with `max_rounds` and `detect_repeats`
//! - `WARSIM_MAX_ROUNDS`: stop after N rounds (the larger deck wins)
//! - `WARSIM_DETECT_REPEATS`: end in a tie when a position repeats (default on)
//! - `WARSIM_LOG`: log filter for the binary (default `warn`)

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::WarCli;
use commands::handle_play_command;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for narration (typically `stdout`)
/// * `err` - Output stream for diagnostics (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `1` for usage, input, configuration, or output errors
///
/// # Example
///
/// ```
/// use std::io;
/// let mut err = Vec::new();
/// let code = warsim_cli::run(vec!["war_game"], &mut io::sink(), &mut err);
/// assert_eq!(code, 1);
/// assert!(String::from_utf8(err).unwrap().contains("Usage"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match WarCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                // clap's message already ends with the usage line
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    tracing::debug!(
        max_rounds = ?resolved.config.max_rounds,
        max_rounds_source = ?resolved.sources.max_rounds,
        detect_repeats = resolved.config.detect_repeats,
        detect_repeats_source = ?resolved.sources.detect_repeats,
        "configuration resolved"
    );

    match handle_play_command(&cli.input, &cli.output, &resolved.config, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
