//! Search limits carried by a `go` command.
//!
//! Only the parsing lives here. Deciding how much of the clock to spend is
//! the searcher's business.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Limits parsed from `go`. Fields absent from the command stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchLimits {
    pub wtime_ms: Option<u64>,
    pub btime_ms: Option<u64>,
    pub winc_ms: Option<u64>,
    pub binc_ms: Option<u64>,
    pub movestogo: Option<u64>,
    pub movetime_ms: Option<u64>,
    pub depth: Option<u32>,
    pub nodes: Option<u64>,
    pub infinite: bool,
}

impl SearchLimits {
    /// Parse the arguments of a `go` command. A leading `go` token is
    /// skipped. Unknown keywords and malformed values are ignored.
    #[must_use]
    pub fn from_go_args<S: AsRef<str>>(parts: &[S]) -> Self {
        let mut limits = SearchLimits::default();
        let tokens: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
        let mut i = usize::from(tokens.first() == Some(&"go"));

        while i < tokens.len() {
            let value = tokens.get(i + 1).copied();
            let consumed = match tokens[i] {
                "wtime" => set(&mut limits.wtime_ms, value),
                "btime" => set(&mut limits.btime_ms, value),
                "winc" => set(&mut limits.winc_ms, value),
                "binc" => set(&mut limits.binc_ms, value),
                "movestogo" => set(&mut limits.movestogo, value),
                "movetime" => set(&mut limits.movetime_ms, value),
                "depth" => set(&mut limits.depth, value),
                "nodes" => set(&mut limits.nodes, value),
                "infinite" => {
                    limits.infinite = true;
                    false
                }
                _ => false,
            };
            i += if consumed { 2 } else { 1 };
        }

        limits
    }
}

/// Store a parsed value; returns whether the value token was consumed.
fn set<T: std::str::FromStr>(slot: &mut Option<T>, value: Option<&str>) -> bool {
    match value.and_then(|v| v.parse().ok()) {
        Some(parsed) => {
            *slot = Some(parsed);
            true
        }
        None => false,
    }
}
