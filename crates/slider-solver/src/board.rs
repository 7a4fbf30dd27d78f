//! Board representation and move generation for the sliding-tile puzzle.
//!
//! A board of dimension `n` holds the tiles `0..n*n` in row-major order,
//! with `0` standing for the blank. Moves are named after the direction
//! the blank travels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest supported dimension; keeps every tile value inside a `u16`.
pub const MAX_SIZE: usize = 255;

/// A single slide of the blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order. Breadth-first follows it directly and depth-first
    /// pushes it reversed, so it decides which of several equal-cost goals
    /// is found first.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn name(self) -> &'static str {
        match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One configuration of the puzzle.
///
/// The size and blank index follow from the tiles, so the derived equality
/// and hash compare configurations and a `Board` doubles as the canonical
/// key of the explored sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    tiles: Vec<u16>,
    blank: usize,
}

impl Board {
    /// Build a board from row-major tiles.
    ///
    /// Fails when `n` is out of range, when the tile count is not `n*n`, or
    /// when the tiles are not a permutation of `0..n*n`.
    pub fn new(tiles: Vec<u16>, n: usize) -> Result<Self> {
        if !(2..=MAX_SIZE).contains(&n) {
            return Err(Error::InvalidSize { n, max: MAX_SIZE });
        }
        if tiles.len() != n * n {
            return Err(Error::InvalidLength {
                n,
                expected: n * n,
                got: tiles.len(),
            });
        }

        match permutation_blank(&tiles) {
            Some(blank) => Ok(Self { n, tiles, blank }),
            None => Err(Error::InvalidEntries { tiles }),
        }
    }

    /// Parse a comma-separated tile list such as `"1,2,5,3,4,0,6,7,8"`.
    ///
    /// The dimension is the integer square root of the tile count; a count
    /// that is not a perfect square fails the length check in [`Board::new`].
    pub fn parse(input: &str) -> Result<Self> {
        let tiles = input
            .split(',')
            .enumerate()
            .map(|(position, token)| {
                let token = token.trim();
                token.parse::<u16>().map_err(|source| Error::InvalidTile {
                    token: token.to_string(),
                    position,
                    source,
                })
            })
            .collect::<Result<Vec<u16>>>()?;

        let n = integer_sqrt(tiles.len());
        Self::new(tiles, n)
    }

    /// The solved configuration `0, 1, ..., n*n - 1`.
    pub(crate) fn solved(n: usize) -> Self {
        let tiles = (0..n * n).map(|v| v as u16).collect();
        Self { n, tiles, blank: 0 }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Index of the blank within [`Board::tiles`]
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Index the blank would move to, or `None` if the move leaves the board.
    fn target(&self, mv: Move) -> Option<usize> {
        let n = self.n;
        let blank = self.blank;
        match mv {
            Move::Up if blank >= n => Some(blank - n),
            Move::Down if self.tiles.len() - blank > n => Some(blank + n),
            Move::Left if blank % n != 0 => Some(blank - 1),
            Move::Right if (blank + 1) % n != 0 => Some(blank + 1),
            _ => None,
        }
    }

    /// Whether `mv` keeps the blank on the board.
    pub fn can_move(&self, mv: Move) -> bool {
        self.target(mv).is_some()
    }

    /// Slide the blank, returning the resulting board.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let target = self.target(mv)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            n: self.n,
            tiles,
            blank: target,
        })
    }

    /// Legal successors in `Up, Down, Left, Right` order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |mv| self.apply(mv).map(|board| (mv, board)))
    }

    /// Replay a move list, returning `None` on the first illegal move.
    pub fn apply_path(&self, path: &[Move]) -> Option<Board> {
        path.iter()
            .try_fold(self.clone(), |board, &mv| board.apply(mv))
    }

    /// Number of tile pairs (blank excluded) that appear in the wrong order.
    pub fn inversions(&self) -> usize {
        let values: Vec<u16> = self.tiles.iter().copied().filter(|&v| v != 0).collect();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| values[i + 1..].iter().filter(|&&w| w < v).count())
            .sum()
    }

    /// Whether the solved configuration is reachable from this board.
    ///
    /// The solved board has no inversions and the blank in row 0. On odd
    /// widths every move preserves inversion parity; on even widths a
    /// vertical move flips both the inversion parity and the blank row
    /// parity, so their sum keeps its parity.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.n % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank / self.n) % 2 == 0
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.n) {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Blank index if `tiles` is a permutation of `0..tiles.len()`.
fn permutation_blank(tiles: &[u16]) -> Option<usize> {
    let mut seen = vec![false; tiles.len()];
    for &tile in tiles {
        let value = usize::from(tile);
        if value >= seen.len() || seen[value] {
            return None;
        }
        seen[value] = true;
    }
    tiles.iter().position(|&tile| tile == 0)
}

fn integer_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}
