use clap::Parser;

/// Simulate the card game War between two players from a CSV deck.
///
/// Cards are dealt alternately from the input file; rounds are narrated on
/// stdout and recorded, one row per round, in the output CSV.
#[derive(Parser, Debug)]
#[command(
    name = "war_game",
    version,
    override_usage = "war_game <input.csv> <output.csv>"
)]
pub struct WarCli {
    /// Deck to play: one `suit,rank` card per line, no header (`.zst` accepted)
    #[arg(value_name = "input.csv")]
    pub input: String,
    /// Destination for the per-round results CSV
    #[arg(value_name = "output.csv")]
    pub output: String,
}
