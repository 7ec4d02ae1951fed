use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::game::{GameResult, RoundRecord};

/// Header row of the results CSV.
pub const CSV_HEADER: &str = "Round,PlayerA_Count,PlayerB_Count,PlayerA_Cards,PlayerB_Cards";

/// Quotes a CSV field, doubling any embedded quotes.
pub fn quote_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn format_row(record: &RoundRecord) -> String {
    format!(
        "{},{},{},{},{}",
        record.round,
        record.player_a_count,
        record.player_b_count,
        quote_field(&record.player_a_cards),
        quote_field(&record.player_b_cards)
    )
}

/// Writes the header and one row per round.
pub fn write_csv(w: &mut dyn Write, records: &[RoundRecord]) -> std::io::Result<()> {
    writeln!(w, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(w, "{}", format_row(record))?;
    }
    Ok(())
}

/// Writes a finished game's rounds to a CSV file.
pub struct CsvRecorder {
    writer: BufWriter<File>,
}

impl CsvRecorder {
    /// Creates (or truncates) the file at `path`, creating missing parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn record(mut self, result: &GameResult) -> std::io::Result<()> {
        write_csv(&mut self.writer, &result.rounds)?;
        self.writer.flush()
    }
}
