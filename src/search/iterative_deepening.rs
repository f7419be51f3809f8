use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::time::Instant;

use super::{NotFound, SearchResult};
use crate::puzzle::{Board, Move, Neighbor};

/// Depth-limited searches with bounds `0..=max_depth`. The first bound that
/// succeeds gives a minimum-move solution; memory stays proportional to the
/// bound.
pub fn iterative_deepening(start: &Board, goal: &Board, max_depth: usize) -> SearchResult {
    let started = Instant::now();

    if start == goal {
        return SearchResult::solved(vec![*start], Vec::new(), 0, started);
    }

    let mut walk = Walk::new(*start, *goal);

    for bound in 0..=max_depth {
        walk.cutoff = false;

        if walk.descend(*start, 0, bound) {
            debug!("solved at bound {} after {} expansions", bound, walk.expanded);
            return SearchResult::solved(walk.boards, walk.moves, walk.expanded, started);
        }

        trace!("bound {} failed, {} expansions so far", bound, walk.expanded);

        // nothing was cut off, so deeper bounds would see the same tree
        if !walk.cutoff {
            debug!("tree exhausted at bound {}", bound);
            return SearchResult::failed(NotFound::Exhausted, walk.expanded, started);
        }
    }

    SearchResult::failed(
        NotFound::DepthCeiling {
            ceiling: max_depth,
        },
        walk.expanded,
        started,
    )
}

/// State of one iterative-deepening run. `boards`, `moves` and `on_path`
/// always describe the active path from the start.
struct Walk {
    goal: Board,
    boards: Vec<Board>,
    moves: Vec<Move>,
    on_path: FxHashSet<Board>,
    expanded: usize,
    /// Whether the current pass stopped anywhere because of its bound.
    cutoff: bool,
}

impl Walk {
    fn new(start: Board, goal: Board) -> Self {
        let mut on_path = FxHashSet::default();
        on_path.insert(start);

        Self {
            goal,
            boards: vec![start],
            moves: Vec::new(),
            on_path,
            expanded: 0,
            cutoff: false,
        }
    }

    /// On success the active path ends at the goal and is left in place.
    fn descend(&mut self, current: Board, depth: usize, bound: usize) -> bool {
        if current == self.goal {
            return true;
        }
        if depth == bound {
            self.cutoff = true;
            return false;
        }

        self.expanded += 1;

        for Neighbor { board, movement } in current.neighbors() {
            if !self.on_path.insert(board) {
                continue;
            }
            self.boards.push(board);
            self.moves.push(movement);

            if self.descend(board, depth + 1, bound) {
                return true;
            }

            self.moves.pop();
            self.boards.pop();
            self.on_path.remove(&board);
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::breadth_first;
    use crate::search::DEFAULT_MAX_DEPTH;

    fn board(tiles: [u8; 9]) -> Board {
        Board::new(tiles).unwrap()
    }

    #[test_log::test]
    fn self_search_needs_no_work() {
        let b = Board::solved();
        let result = iterative_deepening(&b, &b, 0);
        assert!(result.found);
        assert_eq!(result.path, vec![b]);
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test_log::test]
    fn one_move_found_at_bound_one() {
        let start = board([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let goal = board([1, 2, 3, 4, 5, 0, 6, 7, 8]);
        let result = iterative_deepening(&start, &goal, DEFAULT_MAX_DEPTH);
        assert_eq!(result.moves, vec![Move::Right]);
        // bound 0 expands nothing; bound 1 expands the start once
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test_log::test]
    fn matches_breadth_first_length() {
        let start = board([1, 2, 3, 0, 4, 6, 7, 5, 8]);
        let goal = Board::solved();
        let bfs = breadth_first(&start, &goal);
        let ids = iterative_deepening(&start, &goal, DEFAULT_MAX_DEPTH);
        assert_eq!(bfs.depth(), 3);
        assert_eq!(ids.depth(), bfs.depth());
        assert_eq!(ids.path.first(), Some(&start));
        assert_eq!(ids.path.last(), Some(&goal));
    }

    #[test_log::test]
    fn ceiling_below_depth() {
        let start = board([1, 2, 3, 0, 4, 6, 7, 5, 8]);
        let goal = Board::solved();
        let result = iterative_deepening(&start, &goal, 2);
        assert!(!result.found);
        assert_eq!(result.not_found, Some(NotFound::DepthCeiling { ceiling: 2 }));
        assert!(result.nodes_expanded > 0);
    }
}
