//! Command handler modules for the War simulator CLI.
//!
//! Each handler follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod play;

pub use play::handle_play_command;
