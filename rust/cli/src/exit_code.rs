//! Exit code constants for the CLI application.
//!
//! This module centralizes all exit codes used by the CLI, making them
//! easier to maintain and ensuring consistency across error paths.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Usage, input, configuration, and output errors all exit with this code.
pub const ERROR: i32 = 1;
