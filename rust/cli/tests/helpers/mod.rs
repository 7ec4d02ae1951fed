//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` runs the compiled `war_game` binary (or the
//!   library `run` entry point when the binary is unavailable) and captures
//!   stdout, stderr, exit code, and duration.
//! - `temp_files`: `TempFileManager` creates collision-free scratch paths and
//!   deck files, removing them on drop.
//!
//! ```rust,ignore
//! use crate::helpers::{cli_runner::CliRunner, temp_files::TempFileManager};
//!
//! let cli = CliRunner::new().expect("cli runner");
//! let tmp = TempFileManager::new().expect("temp dir");
//! let deck = tmp.create_file("deck.csv", "Hearts,1\nSpades,2\n").expect("write");
//! let out = tmp.path("rounds.csv");
//! let res = cli.run(&[deck.to_str().unwrap(), out.to_str().unwrap()]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod error {
    use std::error::Error as StdError;
    use std::fmt;

    /// Failure inside a test helper, as opposed to a failed assertion.
    #[derive(Debug)]
    pub struct TestError {
        pub kind: TestErrorKind,
        pub message: String,
        pub source: Option<Box<dyn StdError + Send + Sync>>,
    }

    impl TestError {
        pub fn new(kind: TestErrorKind, message: impl Into<String>) -> Self {
            Self {
                kind,
                message: message.into(),
                source: None,
            }
        }

        pub fn with_source(
            kind: TestErrorKind,
            message: impl Into<String>,
            source: impl StdError + Send + Sync + 'static,
        ) -> Self {
            Self {
                kind,
                message: message.into(),
                source: Some(Box::new(source)),
            }
        }
    }

    impl fmt::Display for TestError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }

    impl StdError for TestError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source
                .as_deref()
                .map(|err| err as &(dyn StdError + 'static))
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TestErrorKind {
        BinaryNotFound,
        FileOperationFailed,
    }

    impl fmt::Display for TestErrorKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                TestErrorKind::BinaryNotFound => "binary not found",
                TestErrorKind::FileOperationFailed => "file operation failed",
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::{TestError, TestErrorKind};

        #[test]
        fn with_source_keeps_kind_and_message() {
            let err = TestError::with_source(
                TestErrorKind::FileOperationFailed,
                "writing deck",
                std::io::Error::other("disk full"),
            );

            assert_eq!(err.kind, TestErrorKind::FileOperationFailed);
            assert_eq!(err.to_string(), "file operation failed: writing deck");
            assert!(err.source.is_some());
        }
    }
}

pub use error::{TestError, TestErrorKind};
pub mod cli_runner;
