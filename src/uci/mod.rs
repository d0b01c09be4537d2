//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Handles communication with chess GUIs following the UCI specification.
//! The session in [`session`] owns the board and answers one command per
//! input line.

use std::fmt;
use std::io;

use crate::board::{Board, FenError, Move, MoveError, MoveParseError};
use crate::engine::MoveAuthority;

pub mod command;
pub mod options;
pub mod report;
pub mod session;

pub use session::{SessionState, UciSession};

/// Error type for a single UCI command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Malformed move token in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Well-formed move the board or the move authority refused
    IllegalMove { move_str: String, error: MoveError },
    /// Missing required parts in the command
    MissingParts,
    /// Command not allowed in the current session state
    OutOfSequence { command: String, state: SessionState },
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::IllegalMove { move_str, error } => {
                write!(f, "Illegal move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
            UciError::OutOfSequence { command, state } => {
                write!(f, "'{command}' is not accepted in state {state}")
            }
        }
    }
}

impl std::error::Error for UciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UciError::InvalidFen(e) => Some(e),
            UciError::InvalidMove { error, .. } => Some(error),
            UciError::IllegalMove { error, .. } => Some(error),
            UciError::MissingParts | UciError::OutOfSequence { .. } => None,
        }
    }
}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Why the protocol loop stopped without a `quit`.
#[derive(Debug)]
pub enum ProtocolError {
    /// Input closed before `quit`
    EndOfInput,
    /// Reading a command or writing a response failed
    Io(io::Error),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::EndOfInput => write!(f, "End of input before quit"),
            ProtocolError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::EndOfInput => None,
            ProtocolError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(e: io::Error) -> Self {
        ProtocolError::Io(e)
    }
}

/// Parse a move token and apply it to `board`.
///
/// When a move authority is given it must accept the move first. On error the
/// board is unchanged.
pub fn apply_uci_move(
    board: &mut Board,
    token: &str,
    authority: Option<&dyn MoveAuthority>,
) -> Result<Move, UciError> {
    let mv: Move = token.parse().map_err(|error| UciError::InvalidMove {
        move_str: token.to_string(),
        error,
    })?;
    let illegal = |error| UciError::IllegalMove {
        move_str: token.to_string(),
        error,
    };

    if let Some(authority) = authority {
        if !authority.is_legal(board, mv) {
            return Err(illegal(MoveError::RejectedByAuthority {
                notation: token.to_string(),
            }));
        }
    }
    board.apply_move(mv).map_err(illegal)?;
    Ok(mv)
}

/// Parse a UCI position command into a fresh board.
///
/// Accepts "position startpos", "position fen <fen>" and "position <fen>",
/// each optionally followed by "moves <move1> <move2> ...". The board is
/// built on the side, so a failure anywhere leaves the caller's board alone.
pub fn try_parse_position_command<S: AsRef<str>>(
    parts: &[S],
    authority: Option<&dyn MoveAuthority>,
) -> Result<Board, UciError> {
    let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
    let mut i = usize::from(parts.first() == Some(&"position"));

    let moves_at = parts[i..]
        .iter()
        .position(|p| *p == "moves")
        .map_or(parts.len(), |pos| pos + i);
    let setup = &parts[i..moves_at];

    let mut board = match setup {
        [] => return Err(UciError::MissingParts),
        ["startpos"] => Board::new(),
        ["startpos", ..] => return Err(UciError::MissingParts),
        ["fen"] => return Err(UciError::MissingParts),
        ["fen", fen @ ..] => Board::try_from_fen(&fen.join(" "))?,
        fen => Board::try_from_fen(&fen.join(" "))?,
    };

    i = moves_at + 1;
    for token in parts.iter().skip(i) {
        apply_uci_move(&mut board, token, authority)?;
    }

    Ok(board)
}
