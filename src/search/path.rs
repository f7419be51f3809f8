use log::warn;
use rustc_hash::FxHashMap;

use crate::puzzle::{Board, Move};

/// Child to (parent, move that produced the child). The seed maps to `None`.
pub type Parents = FxHashMap<Board, Option<(Board, Move)>>;

/// An ordered start-to-goal walk. `boards` holds one more entry than `moves`
/// unless the path is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    pub boards: Vec<Board>,
    pub moves: Vec<Move>,
}

impl Path {
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

/// Follows `parents` back from `goal` to `start`.
///
/// Returns an empty path when the chain is missing a link, ends at a seed
/// other than `start`, or loops.
pub fn reconstruct(parents: &Parents, start: &Board, goal: &Board) -> Path {
    let mut boards = vec![*goal];
    let mut moves = Vec::new();
    let mut current = *goal;

    while current != *start {
        match parents.get(&current) {
            Some(Some((parent, movement))) => {
                moves.push(*movement);
                boards.push(*parent);
                current = *parent;
            }
            _ => {
                warn!("no predecessor recorded for {:?}", current);
                return Path::default();
            }
        }

        if moves.len() > parents.len() {
            warn!("predecessor chain from {:?} loops", goal);
            return Path::default();
        }
    }

    boards.reverse();
    moves.reverse();
    Path { boards, moves }
}
