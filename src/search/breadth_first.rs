use log::{debug, trace};
use std::collections::{hash_map::Entry, VecDeque};
use std::time::Instant;

use super::path::{reconstruct, Parents};
use super::{NotFound, SearchResult};
use crate::puzzle::{Board, Neighbor, REACHABLE_STATES};

/// Breadth-first search. Returns a minimum-move solution; among those, the
/// first one reached in [`crate::puzzle::Move::ALL`] order.
pub fn breadth_first(start: &Board, goal: &Board) -> SearchResult {
    let started = Instant::now();

    if start == goal {
        return SearchResult::solved(vec![*start], Vec::new(), 0, started);
    }

    // presence in `parents` means discovered
    let mut parents =
        Parents::with_capacity_and_hasher(REACHABLE_STATES, Default::default());
    let mut frontier = VecDeque::with_capacity(REACHABLE_STATES / 4);
    let mut expanded = 0;

    parents.insert(*start, None);
    frontier.push_back(*start);

    while let Some(current) = frontier.pop_front() {
        expanded += 1;

        for Neighbor { board, movement } in current.neighbors() {
            let Entry::Vacant(slot) = parents.entry(board) else {
                continue;
            };
            slot.insert(Some((current, movement)));

            if board == *goal {
                debug!(
                    "goal discovered after {} expansions, {} boards seen",
                    expanded,
                    parents.len()
                );
                let path = reconstruct(&parents, start, goal);
                if path.is_empty() {
                    return SearchResult::failed(NotFound::BrokenPath, expanded, started);
                }
                return SearchResult::solved(path.boards, path.moves, expanded, started);
            }

            frontier.push_back(board);
        }

        if expanded % 10_000 == 0 {
            trace!("{} expanded, frontier {}", expanded, frontier.len());
        }
    }

    debug!("frontier exhausted after {} expansions", expanded);
    SearchResult::failed(NotFound::Exhausted, expanded, started)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: [u8; 9]) -> Board {
        Board::new(tiles).unwrap()
    }

    #[test_log::test]
    fn self_search_needs_no_work() {
        let b = board([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        let result = breadth_first(&b, &b);
        assert!(result.found);
        assert_eq!(result.path, vec![b]);
        assert!(result.moves.is_empty());
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test_log::test]
    fn two_moves_away() {
        let start = Board::solved();
        let goal = board([1, 2, 3, 4, 0, 5, 7, 8, 6]);
        let result = breadth_first(&start, &goal);
        assert_eq!(result.move_string(), "UL");
        assert_eq!(result.path.len(), 3);
        assert!(result.nodes_expanded > 0);
    }

    #[test_log::test]
    fn hardest_instance_takes_31_moves() {
        let start = board([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        let goal = Board::solved();
        let result = breadth_first(&start, &goal);
        assert!(result.found);
        assert_eq!(result.depth(), 31);
    }

    #[test_log::test]
    fn unsolvable_pair_exhausts_reachable_half() {
        let start = Board::solved();
        let goal = board([2, 1, 3, 4, 5, 6, 7, 8, 0]);
        let result = breadth_first(&start, &goal);
        assert!(!result.found);
        assert_eq!(result.not_found, Some(NotFound::Exhausted));
        assert_eq!(result.nodes_expanded, REACHABLE_STATES);
    }
}
