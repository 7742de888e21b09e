mod a_star;
mod bfs;
mod heuristic;
mod node;
mod path;

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::PuzzleError;

pub use a_star::{search, AStar, SearchReport, SearchState, SearchStats};
pub use bfs::DistanceMap;
pub use heuristic::Heuristic;
pub use node::{NodeId, SearchNode};
pub use path::{Path, Solution, Step};

pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;

/// A 3x3 arrangement of the tiles `0..=8`, `0` being the blank.
///
/// Boards are plain values: every move produces a new board and leaves the
/// original untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Board {
    tiles: [u8; CELLS],
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.tiles.chunks(SIDE) {
            let line = row
                .iter()
                .map(|val| val.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Board {
    /// Wraps `tiles` without checking them. Use [`Board::try_from`] or
    /// [`str::parse`] for untrusted input.
    pub const fn new(tiles: [u8; CELLS]) -> Self {
        Board { tiles }
    }

    pub const fn solved() -> Self {
        Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0])
    }

    pub fn from_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        tiles.shuffle(rng);
        Board { tiles }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn get_value(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * SIDE + col]
    }

    /// Index of the blank tile.
    ///
    /// # Panics
    ///
    /// Panics if the board holds no `0`, which cannot happen for a board that
    /// went through validation.
    pub fn blank(&self) -> usize {
        match self.tiles.iter().position(|&tile| tile == 0) {
            Some(index) => index,
            None => panic!("board {:?} has no blank tile", self.tiles),
        }
    }

    /// Returns the board with the blank moved one cell in `direction`.
    ///
    /// The move must be legal for the current blank position; this is only
    /// checked in debug builds.
    pub fn apply(&self, direction: Move) -> Board {
        let blank = self.blank();
        debug_assert!(
            direction.is_legal(blank),
            "illegal move {} from blank index {}",
            direction,
            blank
        );

        let target = blank.wrapping_add_signed(direction.offset());
        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Board { tiles }
    }

    pub fn try_move(&self, direction: Move) -> Option<Board> {
        if direction.is_legal(self.blank()) {
            Some(self.apply(direction))
        } else {
            None
        }
    }

    /// Every board one legal move away, in [`Move::all`] order.
    pub fn neighbours(self) -> impl Iterator<Item = (Move, Board)> {
        let blank = self.blank();
        Move::all()
            .into_iter()
            .filter(move |direction| direction.is_legal(blank))
            .map(move |direction| (direction, self.apply(direction)))
    }

    fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &val)| tiles[i + 1..].iter().filter(|&&next| next < val).count())
            .sum()
    }

    /// Whether `goal` is reachable from this board. On a 3x3 grid that holds
    /// exactly when both boards have the same inversion parity.
    pub fn is_solvable_to(&self, goal: &Board) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    fn from_values(values: &[u32]) -> Result<Self, PuzzleError> {
        if values.len() != CELLS {
            return Err(PuzzleError::WrongLength {
                found: values.len(),
            });
        }

        let mut tiles = [0u8; CELLS];
        let mut seen = [false; CELLS];
        for (slot, &value) in tiles.iter_mut().zip(values) {
            if value as usize >= CELLS {
                return Err(PuzzleError::OutOfRange { value });
            }
            let value = value as u8;
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(PuzzleError::Duplicate { value });
            }
            *slot = value;
        }

        Ok(Board { tiles })
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = PuzzleError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let values: Vec<u32> = values.iter().map(|&v| u32::from(v)).collect();
        Board::from_values(&values)
    }
}

/// Parses nine integers separated by whitespace and/or commas,
/// e.g. `"1 2 3 4 5 6 7 8 0"` or `"1,2,3,4,5,6,7,8,0"`.
impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u32>().map_err(|_| PuzzleError::InvalidToken {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Board::from_values(&values)
    }
}

/// Direction the blank travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the search.
    pub const fn all() -> [Move; 4] {
        [Move::Up, Move::Down, Move::Left, Move::Right]
    }

    pub const fn reverse(&self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Change in the blank's linear index.
    pub const fn offset(&self) -> isize {
        match self {
            Move::Up => -(SIDE as isize),
            Move::Down => SIDE as isize,
            Move::Left => -1,
            Move::Right => 1,
        }
    }

    /// Whether the blank at `blank` can travel in this direction without
    /// leaving the grid.
    pub const fn is_legal(&self, blank: usize) -> bool {
        let (row, col) = (blank / SIDE, blank % SIDE);
        match self {
            Move::Up => row != 0,
            Move::Down => row != SIDE - 1,
            Move::Left => col != 0,
            Move::Right => col != SIDE - 1,
        }
    }

    pub const fn label(&self) -> char {
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
