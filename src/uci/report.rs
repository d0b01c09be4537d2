//! Response lines sent to the GUI.

use crate::board::Move;
use crate::{ENGINE_AUTHOR, ENGINE_NAME, NULL_MOVE};

use super::UciError;

/// Identification block answering `uci`.
#[must_use]
pub fn identify() -> Vec<String> {
    vec![
        format!("id name {ENGINE_NAME}"),
        format!("id author {ENGINE_AUTHOR}"),
        "uciok".to_string(),
    ]
}

#[must_use]
pub fn ready() -> String {
    "readyok".to_string()
}

/// Answer to `go`: the chosen move, or the null move when there is none.
#[must_use]
pub fn chosen_move(mv: Option<Move>) -> String {
    mv.map_or_else(|| NULL_MOVE.to_string(), |mv| mv.to_string())
}

/// One-line diagnostic for a failed command.
#[must_use]
pub fn error(err: &UciError) -> String {
    format!("info string error: {err}")
}
