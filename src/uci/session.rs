//! The UCI session: one board, one state machine, one command per line.

use std::fmt;
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::board::Board;
use crate::engine::{
    CommandResult, MoveAuthority, NullSearcher, Protocol, SearchLimits, Searcher,
};

use super::command::{parse_uci_command, UciCommand};
use super::options::{parse_setoption, PendingOptions};
use super::{report, try_parse_position_command, ProtocolError, UciError};

/// Where the session is in the UCI conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Nothing negotiated yet
    Idle,
    /// Handshake done, no board set up
    Ready,
    /// Board initialized, accepting `go`
    InGame,
    /// `quit` received or input closed
    Terminated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "Idle",
            SessionState::Ready => "Ready",
            SessionState::InGame => "InGame",
            SessionState::Terminated => "Terminated",
        };
        f.write_str(name)
    }
}

pub struct UciSession {
    board: Board,
    state: SessionState,
    options: PendingOptions,
    limits: SearchLimits,
    searcher: Box<dyn Searcher>,
    authority: Option<Box<dyn MoveAuthority>>,
}

impl UciSession {
    /// A fresh session with the start position and no move search.
    #[must_use]
    pub fn new() -> Self {
        UciSession {
            board: Board::new(),
            state: SessionState::Idle,
            options: PendingOptions::new(),
            limits: SearchLimits::default(),
            searcher: Box::new(NullSearcher),
            authority: None,
        }
    }

    #[must_use]
    pub fn with_searcher(mut self, searcher: impl Searcher + 'static) -> Self {
        self.searcher = Box::new(searcher);
        self
    }

    /// Check every `position` move with `authority` before applying it.
    #[must_use]
    pub fn with_authority(mut self, authority: impl MoveAuthority + 'static) -> Self {
        self.authority = Some(Box::new(authority));
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn options(&self) -> &PendingOptions {
        &self.options
    }

    /// Limits of the most recent `go`.
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Execute one parsed command.
    ///
    /// On error neither the board nor the state has changed.
    pub fn execute(&mut self, command: UciCommand) -> Result<CommandResult, UciError> {
        match command {
            UciCommand::Uci => {
                if self.state == SessionState::Idle {
                    self.state = SessionState::Ready;
                }
                Ok(CommandResult::Ok(report::identify()))
            }
            UciCommand::IsReady => Ok(CommandResult::Ok(vec![report::ready()])),
            UciCommand::UciNewGame => {
                self.board = Board::new();
                self.limits = SearchLimits::default();
                self.state = SessionState::InGame;
                info!("new game");
                Ok(CommandResult::Ok(Vec::new()))
            }
            UciCommand::Position(parts) => {
                self.require(&[SessionState::Ready, SessionState::InGame], "position")?;
                self.board = try_parse_position_command(&parts, self.authority.as_deref())?;
                self.state = SessionState::InGame;
                debug!("position set:\n{}", self.board.render_ascii());
                Ok(CommandResult::Ok(Vec::new()))
            }
            UciCommand::Go(parts) => {
                self.require(&[SessionState::InGame], "go")?;
                self.limits = SearchLimits::from_go_args(&parts);
                debug!("go with {:?}", self.limits);
                let chosen = self.searcher.choose_move(&self.board, &self.limits);
                Ok(CommandResult::Ok(vec![report::chosen_move(chosen)]))
            }
            UciCommand::SetOption(parts) => {
                match parse_setoption(&parts) {
                    Some((name, value)) => {
                        debug!("option {name} = {value:?}");
                        self.options.set(&name, value.as_deref());
                    }
                    None => debug!("setoption without a name ignored"),
                }
                Ok(CommandResult::Ok(Vec::new()))
            }
            UciCommand::Stop => {
                self.searcher.stop();
                Ok(CommandResult::Ok(Vec::new()))
            }
            UciCommand::Quit => {
                self.searcher.stop();
                self.state = SessionState::Terminated;
                Ok(CommandResult::Quit)
            }
            UciCommand::Ignored(_) => Ok(CommandResult::Ok(Vec::new())),
            UciCommand::Unknown(line) => Ok(CommandResult::Unknown(line)),
        }
    }

    fn require(&self, allowed: &[SessionState], command: &str) -> Result<(), UciError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(UciError::OutOfSequence {
                command: command.to_string(),
                state: self.state,
            })
        }
    }
}

impl Default for UciSession {
    fn default() -> Self {
        UciSession::new()
    }
}

impl Protocol for UciSession {
    fn process_command(&mut self, line: &str) -> CommandResult {
        if self.state == SessionState::Terminated {
            return CommandResult::Quit;
        }
        let Some(command) = parse_uci_command(line) else {
            return CommandResult::Ok(Vec::new());
        };
        let keyword = command.keyword().to_string();

        match self.execute(command) {
            Ok(result) => {
                debug!("{keyword}: accepted in state {}", self.state);
                result
            }
            Err(e) => {
                warn!("{keyword}: {e}");
                CommandResult::Ok(vec![report::error(&e)])
            }
        }
    }

    fn name(&self) -> &'static str {
        "UCI"
    }

    fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), ProtocolError> {
        info!("{} session started", self.name());
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Bytes that are not UTF-8 cannot form a keyword, so such a line
            // falls through as an unknown command.
            let line = String::from_utf8_lossy(&buf);
            match self.process_command(&line) {
                CommandResult::Ok(lines) => {
                    for response in &lines {
                        writeln!(output, "{response}")?;
                    }
                }
                CommandResult::Quit => {
                    output.flush()?;
                    info!("quit received");
                    return Ok(());
                }
                CommandResult::Unknown(cmd) => debug!("ignoring unknown command: {cmd}"),
            }
            output.flush()?;
        }

        self.state = SessionState::Terminated;
        Err(ProtocolError::EndOfInput)
    }
}
