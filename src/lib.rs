//! An 8-puzzle solver: breadth-first and iterative-deepening search behind
//! an inversion-parity solvability check.

pub mod cli;
pub mod error;
pub mod puzzle;
pub mod render;
pub mod search;

pub use error::{Error, InvalidBoard};
pub use puzzle::{is_solvable, Board, Move, Neighbor};
pub use search::{solve, Mode, NotFound, SearchConfig, SearchResult, Verdict};
