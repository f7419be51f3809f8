//! Command-line glue: arguments, board text, stdin grids.

use clap::Parser;
use log::warn;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{BufRead, Write};

use crate::error::Error;
use crate::puzzle::{Board, CELLS};
use crate::search::{Mode, SearchConfig, DEFAULT_MAX_DEPTH};

#[derive(Debug, Parser)]
#[command(
    name = "eight-puzzle",
    version,
    about = "Solve the 8-puzzle with breadth-first or iterative-deepening search"
)]
pub struct Args {
    /// `bfs`, or `dfs` for iterative deepening. Anything else falls back to bfs.
    #[arg(default_value = "bfs")]
    pub mode: String,

    /// Start board as 9 digits, 0 for the blank (e.g. 123405678).
    /// Read from stdin unless both boards are given.
    pub start: Option<String>,

    /// Goal board as 9 digits.
    pub goal: Option<String>,

    /// Deepest bound tried by iterative deepening.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Solve a random solvable board against the solved board.
    #[arg(long)]
    pub random: bool,

    /// Seed for --random.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Print boards without colors.
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn mode(&self) -> Mode {
        Mode::from_arg(&self.mode).unwrap_or_else(|| {
            warn!("unrecognized mode '{}', defaulting to bfs", self.mode);
            Mode::BreadthFirst
        })
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            mode: self.mode(),
            max_depth: self.max_depth,
        }
    }

    /// The (start, goal) pair: random, from the arguments, or prompted for.
    pub fn boards<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        prompt: &mut W,
    ) -> Result<(Board, Board), Error> {
        if self.random {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let goal = Board::solved();
            return Ok((Board::shuffled(&mut rng, &goal), goal));
        }

        if let (Some(start), Some(goal)) = (&self.start, &self.goal) {
            return Ok((parse_board(start, "start")?, parse_board(goal, "goal")?));
        }

        writeln!(prompt, "Enter START (3x3 grid, digits 0..8; 0 = blank):")?;
        prompt.flush()?;
        let start = read_grid(input, "start")?;
        writeln!(prompt, "Enter GOAL (3x3 grid, digits 0..8; 0 = blank):")?;
        prompt.flush()?;
        let goal = read_grid(input, "goal")?;

        Ok((start, goal))
    }
}

fn digits(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars().filter_map(|c| c.to_digit(10)).map(|d| d as u8)
}

/// Parses a board from its digits, ignoring every other character.
pub fn parse_board(text: &str, which: &'static str) -> Result<Board, Error> {
    let tiles: Vec<u8> = digits(text).collect();
    Board::try_from(tiles.as_slice()).map_err(|source| Error::InvalidBoard { which, source })
}

/// Reads lines until 9 digits have been seen. Digits past the ninth on the
/// last line are dropped.
pub fn read_grid<R: BufRead>(input: &mut R, which: &'static str) -> Result<Board, Error> {
    let mut tiles = Vec::with_capacity(CELLS);
    let mut line = String::new();

    while tiles.len() < CELLS {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::ShortInput(which));
        }
        tiles.extend(digits(&line));
    }

    tiles.truncate(CELLS);
    Board::try_from(tiles.as_slice()).map_err(|source| Error::InvalidBoard { which, source })
}
