//! Sinks for the play-by-play text produced by the game runner.
//!
//! The runner never prints directly; the binary hands it a
//! [`WriteNarrator`] over stdout while tests capture lines into a `Vec<String>`.

use std::io::{self, Write};

pub trait Narrator {
    fn narrate(&mut self, line: &str) -> io::Result<()>;
}

/// Writes each line, newline-terminated, to any `Write` sink.
#[derive(Debug)]
pub struct WriteNarrator<W: Write> {
    inner: W,
}

impl<W: Write> WriteNarrator<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Narrator for WriteNarrator<W> {
    fn narrate(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", line)
    }
}

impl Narrator for Vec<String> {
    fn narrate(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Discards narration.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
