//! Protocol trait for chess engine communication.
//!
//! Defines the interface a line-oriented front-end presents to the binary.

use std::io::{BufRead, Write};

use crate::uci::ProtocolError;

/// Result of processing a protocol command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command processed, with the response lines to emit (possibly none)
    Ok(Vec<String>),
    /// Engine should quit
    Quit,
    /// Command not recognized
    Unknown(String),
}

impl CommandResult {
    /// Response lines to write for this result.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            CommandResult::Ok(lines) => lines,
            CommandResult::Quit | CommandResult::Unknown(_) => &[],
        }
    }
}

/// Trait for chess engine protocols
pub trait Protocol {
    /// Process a single command line and return the result
    fn process_command(&mut self, line: &str) -> CommandResult;

    /// Get the protocol name (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Run the protocol's main loop until `quit` or end of input.
    ///
    /// Response lines are flushed after every command.
    fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<(), ProtocolError>;
}
