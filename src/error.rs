use std::io;

use thiserror::Error;

/// Why a tile sequence is not a permutation of `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBoard {
    #[error("expected 9 tiles, got {0}")]
    WrongLength(usize),
    #[error("tile {0} is outside 0..=8")]
    OutOfRange(u8),
    #[error("tile {0} appears more than once")]
    Duplicate(u8),
}

/// Failures of the command-line layer. The solver itself never fails: its
/// outcomes are reported through [`crate::search::Verdict`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {which} board: {source}")]
    InvalidBoard {
        which: &'static str,
        source: InvalidBoard,
    },
    #[error("failed to read 9 digits for the {0} board")]
    ShortInput(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}
