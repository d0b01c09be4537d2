//! Engine-facing seams.
//!
//! The protocol front-end owns the board and talks to the outside through
//! these traits: a [`Protocol`] per front-end, an optional [`MoveAuthority`]
//! for full legality and a [`Searcher`] for `go`.

mod authority;
mod protocol;
pub mod time;

pub use authority::{MoveAuthority, NullSearcher, Searcher};
pub use protocol::{CommandResult, Protocol};
pub use time::SearchLimits;
