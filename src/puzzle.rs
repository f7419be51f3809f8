use rand::{seq::SliceRandom, Rng};
use std::fmt;

use crate::error::InvalidBoard;

/// Width and height of the grid.
pub const SIDE: usize = 3;
/// Number of cells, blank included.
pub const CELLS: usize = SIDE * SIDE;
/// Boards reachable from any given board: half of the 9! permutations.
pub const REACHABLE_STATES: usize = 181_440;

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Generation order shared by both search engines. Ties between equally
    /// short solutions are broken by this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset of the cell the blank moves into.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A board produced by applying `movement` to some other board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub board: Board,
    pub movement: Move,
}

/// One configuration of the 3x3 grid: a permutation of `0..=8` in row-major
/// order, `0` being the blank.
///
/// The blank index is cached alongside the tiles. It is fully determined by
/// the tiles, so derived equality and hashing stay purely structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// `1 2 3 / 4 5 6 / 7 8 _`
    pub fn solved() -> Self {
        Self {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
            blank: (CELLS - 1) as u8,
        }
    }

    pub fn new(tiles: [u8; CELLS]) -> Result<Self, InvalidBoard> {
        let mut seen = [false; CELLS];
        let mut blank = 0;

        for (index, &tile) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(InvalidBoard::OutOfRange(tile))?;
            if *slot {
                return Err(InvalidBoard::Duplicate(tile));
            }
            *slot = true;
            if tile == 0 {
                blank = index as u8;
            }
        }

        Ok(Self { tiles, blank })
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Linear index of the blank.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    /// Slides the blank one cell in `movement`'s direction, or `None` if that
    /// would leave the grid. `self` is left untouched.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        let (dx, dy) = movement.as_offset();

        let row = (self.blank() / SIDE) as isize + dx;
        let col = (self.blank() % SIDE) as isize + dy;

        if row < 0 || row >= SIDE as isize || col < 0 || col >= SIDE as isize {
            return None;
        }

        let target = row as usize * SIDE + col as usize;
        let mut tiles = self.tiles;
        tiles.swap(self.blank(), target);

        Some(Self {
            tiles,
            blank: target as u8,
        })
    }

    /// Every board one legal move away, in [`Move::ALL`] order. Yields
    /// between two (corner) and four (centre) neighbors.
    pub fn neighbors(self) -> impl Iterator<Item = Neighbor> {
        Move::ALL.into_iter().filter_map(move |movement| {
            self.apply_move(movement)
                .map(|board| Neighbor { board, movement })
        })
    }

    /// Pairs of non-blank tiles that appear in descending order.
    pub fn inversions(&self) -> usize {
        let tiles = &self.tiles;
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// A uniformly shuffled board that is solvable against `goal`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, goal: &Board) -> Self {
        let mut tiles = goal.tiles;

        loop {
            tiles.shuffle(rng);
            let blank = tiles.iter().position(|&tile| tile == 0).unwrap_or(0);
            let board = Self {
                tiles,
                blank: blank as u8,
            };

            if is_solvable(&board, goal) {
                return board;
            }
        }
    }

    /// Walks `steps` random legal moves away from `self`, never immediately
    /// undoing the previous move. The optimal distance back is at most `steps`.
    pub fn scrambled<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Self {
        let mut board = *self;
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<Neighbor> = board
                .neighbors()
                .filter(|n| last.map_or(true, |last| n.movement != last.opposite()))
                .collect();

            if let Some(next) = options.choose(rng) {
                board = next.board;
                last = Some(next.movement);
            }
        }

        board
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = InvalidBoard;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        let tiles: [u8; CELLS] = tiles
            .try_into()
            .map_err(|_| InvalidBoard::WrongLength(tiles.len()))?;
        Self::new(tiles)
    }
}

/// Whether `goal` can be reached from `start`.
///
/// A horizontal slide keeps the tile order; a vertical slide hops one tile
/// over the two between, changing the inversion count by an even amount on a
/// 3-wide grid. Parity is therefore invariant, and for the 3x3 puzzle equal
/// parity is also sufficient.
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    start.inversions() % 2 == goal.inversions() % 2
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for tile in self.tiles {
            write!(f, "{}", tile)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIDE) {
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| match tile {
                    0 => " ".to_string(),
                    tile => tile.to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
