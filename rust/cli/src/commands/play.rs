//! Play command: load a deck, run the game, record the rounds.
//!
//! The output CSV is only created after the deck has loaded and the game has
//! finished, so a bad input never leaves a partial results file behind.

use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use std::io::Write;
use warsim_engine::WarError;
use warsim_engine::game::run_game;
use warsim_engine::loader::parse_deal;
use warsim_engine::narrator::WriteNarrator;
use warsim_engine::recorder::CsvRecorder;

/// Plays a full game of War from `input` and writes the round records to `output`.
///
/// # Arguments
///
/// * `input` - Deck CSV (`suit,rank` per line, `.zst` accepted)
/// * `output` - Destination of the per-round CSV
/// * `config` - Resolved run configuration
/// * `out` - Narration stream
/// * `err` - Warning stream
///
/// # Errors
///
/// Returns `CliError::Engine` for unreadable, empty, or malformed decks and
/// `CliError::Io` when narration or the results file cannot be written.
pub fn handle_play_command(
    input: &str,
    output: &str,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = read_text_auto(input).map_err(|reason| WarError::File {
        path: input.to_string(),
        reason,
    })?;
    let dealt = parse_deal(&text)?;
    if let Some(card) = &dealt.discarded {
        ui::display_warning(
            err,
            &format!(
                "{} holds an odd number of cards; the trailing {} is discarded",
                input, card
            ),
        )?;
    }
    let (deck_a, deck_b) = dealt.into_decks();

    let result = {
        let mut narrator = WriteNarrator::new(&mut *out);
        run_game(deck_a, deck_b, &config.game_options(), &mut narrator)?
    };

    CsvRecorder::create(output)
        .and_then(|recorder| recorder.record(&result))
        .map_err(|e| {
            CliError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to write {}: {}", output, e),
            ))
        })?;
    tracing::info!(output, rounds = result.rounds.len(), "results written");
    writeln!(out, "Results written to {}", output)?;
    Ok(())
}
