//! Uninformed searches over the 8-puzzle state graph.
//!
//! Both engines are single-threaded and run to completion within one call.
//! Everything they allocate is owned by that call.

mod breadth_first;
mod iterative_deepening;
pub mod path;

pub use breadth_first::breadth_first;
pub use iterative_deepening::iterative_deepening;

use log::{error, info, warn};
use std::time::{Duration, Instant};

use crate::puzzle::{is_solvable, Board, Move};

/// Longest optimal solution of any solvable 3x3 instance.
pub const DEFAULT_MAX_DEPTH: usize = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    BreadthFirst,
    IterativeDeepening,
}

impl Mode {
    /// Case-insensitive `bfs`, `dfs` or `iddfs`.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "bfs" => Some(Mode::BreadthFirst),
            "dfs" | "iddfs" => Some(Mode::IterativeDeepening),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub mode: Mode,
    /// Deepest bound tried by iterative deepening. Ignored by breadth-first.
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: Mode::BreadthFirst,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Why a search gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    /// Every reachable board was explored. Cannot happen for a pair the
    /// parity check accepted.
    Exhausted,
    /// Iterative deepening reached its configured ceiling. The ceiling is
    /// below the solution depth.
    DepthCeiling { ceiling: usize },
    /// The goal was discovered but its predecessor chain is broken.
    BrokenPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    /// Start to goal inclusive. Empty unless `found`.
    pub path: Vec<Board>,
    pub moves: Vec<Move>,
    pub nodes_expanded: usize,
    pub elapsed: Duration,
    /// Set exactly when `found` is false.
    pub not_found: Option<NotFound>,
}

impl SearchResult {
    fn solved(path: Vec<Board>, moves: Vec<Move>, nodes_expanded: usize, started: Instant) -> Self {
        Self {
            found: true,
            path,
            moves,
            nodes_expanded,
            elapsed: started.elapsed(),
            not_found: None,
        }
    }

    fn failed(reason: NotFound, nodes_expanded: usize, started: Instant) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            moves: Vec::new(),
            nodes_expanded,
            elapsed: started.elapsed(),
            not_found: Some(reason),
        }
    }

    /// Number of moves in the solution.
    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    /// Moves as letters, e.g. `"RDL"`.
    pub fn move_string(&self) -> String {
        self.moves.iter().map(Move::letter).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The boards have different inversion parity. Nothing was searched.
    Unsolvable,
    Searched(SearchResult),
}

/// Checks solvability, then runs the configured engine.
pub fn solve(start: &Board, goal: &Board, config: &SearchConfig) -> Verdict {
    if !is_solvable(start, goal) {
        info!("{:?} -> {:?}: inversion parity mismatch", start, goal);
        return Verdict::Unsolvable;
    }

    let result = match config.mode {
        Mode::BreadthFirst => breadth_first(start, goal),
        Mode::IterativeDeepening => iterative_deepening(start, goal, config.max_depth),
    };

    match result.not_found {
        None => info!(
            "{:?}: solved in {} moves, {} nodes expanded, {:?}",
            config.mode,
            result.depth(),
            result.nodes_expanded,
            result.elapsed
        ),
        Some(NotFound::DepthCeiling { ceiling }) => warn!(
            "no solution within depth {}; raise the ceiling (at most {} is ever needed)",
            ceiling, DEFAULT_MAX_DEPTH
        ),
        Some(reason) => error!(
            "{:?} failed on a solvable pair {:?} -> {:?}: {:?}",
            config.mode, start, goal, reason
        ),
    }

    Verdict::Searched(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: [u8; 9]) -> Board {
        Board::new(tiles).unwrap()
    }

    #[test]
    fn parses_mode_arguments() {
        assert_eq!(Mode::from_arg("BFS"), Some(Mode::BreadthFirst));
        assert_eq!(Mode::from_arg("dfs"), Some(Mode::IterativeDeepening));
        assert_eq!(Mode::from_arg("IDDFS"), Some(Mode::IterativeDeepening));
        assert_eq!(Mode::from_arg("astar"), None);
    }

    #[test_log::test]
    fn unsolvable_pairs_are_never_searched() {
        let start = Board::solved();
        let goal = board([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        for mode in [Mode::BreadthFirst, Mode::IterativeDeepening] {
            let config = SearchConfig {
                mode,
                ..SearchConfig::default()
            };
            assert_eq!(solve(&start, &goal, &config), Verdict::Unsolvable);
        }
    }

    #[test_log::test]
    fn adjacent_swap_is_one_move_right() {
        let start = board([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let goal = board([1, 2, 3, 4, 5, 0, 6, 7, 8]);

        let Verdict::Searched(result) = solve(&start, &goal, &SearchConfig::default()) else {
            panic!("pair should be solvable");
        };
        assert!(result.found);
        assert_eq!(result.path, vec![start, goal]);
        assert_eq!(result.move_string(), "R");
    }

    #[test_log::test]
    fn low_ceiling_is_reported_as_configuration_limit() {
        let goal = Board::solved();
        let start = goal
            .apply_move(Move::Up)
            .and_then(|b| b.apply_move(Move::Left))
            .unwrap();
        let config = SearchConfig {
            mode: Mode::IterativeDeepening,
            max_depth: 1,
        };

        let Verdict::Searched(result) = solve(&start, &goal, &config) else {
            panic!("pair should be solvable");
        };
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.not_found, Some(NotFound::DepthCeiling { ceiling: 1 }));
    }

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.mode, Mode::BreadthFirst);
        assert_eq!(config.max_depth, 31);
    }
}
