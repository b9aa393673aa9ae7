use std::{
    fmt::{Debug, Display},
    ops::{Index, IndexMut},
};

use thiserror::Error;

use crate::checkers::board::piece::{Piece, Player};

/// Side length of the checkers board
pub const BOARD_SIZE: usize = 8;

/// Board square
/// `None`: Empty square
/// `Some(piece)`: Square occupied by `piece`
pub type Square = Option<Piece>;

/// Checkers board
#[derive(Debug)]
pub struct Board([Square; BOARD_SIZE * BOARD_SIZE]);

/// Row-column index into the board grid
/// Row 0 is the top rank (displayed as rank 8), row 7 the bottom rank (rank 1)
pub type SquareIdx = [usize; 2];

/// Whether an index lies on the board
pub const fn in_bounds([row, col]: SquareIdx) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

impl Index<SquareIdx> for Board {
    type Output = Square;

    fn index(&self, index: SquareIdx) -> &Self::Output {
        let [i, j] = index;
        debug_assert!(in_bounds(index), "Index out of bounds: [{i}, {j}]");
        &self.0[i * BOARD_SIZE + j]
    }
}

impl IndexMut<SquareIdx> for Board {
    fn index_mut(&mut self, index: SquareIdx) -> &mut Self::Output {
        let [i, j] = index;
        debug_assert!(in_bounds(index), "Index out of bounds: [{i}, {j}]");
        &mut self.0[i * BOARD_SIZE + j]
    }
}

/// Board indices look up tables
pub mod lut;

/// Board initialization
impl Board {
    /// Creates a board with no pieces on it
    pub const fn empty() -> Self {
        Board([None; BOARD_SIZE * BOARD_SIZE])
    }

    /// Creates a new board with both players' pieces on their starting rows
    pub fn new() -> Self {
        Self::empty()
            .with_pieces(&lut::BLACK_STARTING_POSITIONS, Piece::new(Player::Black))
            .expect("Black starting positions are valid")
            .with_pieces(&lut::WHITE_STARTING_POSITIONS, Piece::new(Player::White))
            .expect("White starting positions are valid")
    }
}

impl Default for Board {
    /// Default board is the starting position
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when accessing the board
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardIndexError {
    #[error("Square {0:?} outside of the board")]
    Invalid(SquareIdx),
    #[error("Square {0:?} is empty")]
    Empty(SquareIdx),
    #[error("Square {0:?} is already occupied")]
    Occupied(SquareIdx),
}

impl Board {
    /// Returns a reference to the square at the specified index on the board
    pub fn get(&self, idx: &SquareIdx) -> Result<&Square, BoardIndexError> {
        if in_bounds(*idx) {
            Ok(&self[*idx])
        } else {
            Err(BoardIndexError::Invalid(*idx))
        }
    }

    pub fn get_mut(&mut self, idx: &SquareIdx) -> Result<&mut Square, BoardIndexError> {
        if in_bounds(*idx) {
            Ok(&mut self[*idx])
        } else {
            Err(BoardIndexError::Invalid(*idx))
        }
    }
}

/// Diagonal directions on the board
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NW,  NE,

    SW,  SE,
}

impl Board {
    /// Adjacent square in a given diagonal direction
    fn neighbor(&self, idx: SquareIdx, direction: Direction) -> Option<(SquareIdx, &Square)> {
        match direction {
            Direction::NW => self.next_nw(idx),
            Direction::NE => self.next_ne(idx),
            Direction::SW => self.next_sw(idx),
            Direction::SE => self.next_se(idx),
        }
    }

    /// Neighbor NW
    #[inline(always)]
    fn next_nw(&self, [i, j]: SquareIdx) -> Option<(SquareIdx, &Square)> {
        let idx = [i.checked_sub(1)?, j.checked_sub(1)?];
        Some((idx, &self[idx]))
    }

    /// Neighbor NE
    #[inline(always)]
    fn next_ne(&self, [i, j]: SquareIdx) -> Option<(SquareIdx, &Square)> {
        let idx = [
            i.checked_sub(1)?,
            if j + 1 < BOARD_SIZE { Some(j + 1) } else { None }?,
        ];
        Some((idx, &self[idx]))
    }

    /// Neighbor SW
    #[inline(always)]
    fn next_sw(&self, [i, j]: SquareIdx) -> Option<(SquareIdx, &Square)> {
        let idx = [
            if i + 1 < BOARD_SIZE { Some(i + 1) } else { None }?,
            j.checked_sub(1)?,
        ];
        Some((idx, &self[idx]))
    }

    /// Neighbor SE
    #[inline(always)]
    fn next_se(&self, [i, j]: SquareIdx) -> Option<(SquareIdx, &Square)> {
        let idx = [
            if i + 1 < BOARD_SIZE { Some(i + 1) } else { None }?,
            if j + 1 < BOARD_SIZE { Some(j + 1) } else { None }?,
        ];
        Some((idx, &self[idx]))
    }
}

impl Board {
    /// Sets a piece at the specified index on the board
    pub fn set_piece(&mut self, idx: SquareIdx, piece: Piece) -> Result<(), BoardIndexError> {
        let square = self.get_mut(&idx)?;
        match &square {
            // Square is already occupied
            Some(_) => Err(BoardIndexError::Occupied(idx)),
            // Square is empty, place the piece
            None => {
                *square = Some(piece);
                Ok(())
            }
        }
    }

    /// Places the given piece at the specified indices on the board
    pub fn place_pieces(&mut self, indices: &[SquareIdx], piece: Piece) -> Result<(), BoardIndexError> {
        for &idx in indices {
            self.set_piece(idx, piece)?;
        }
        Ok(())
    }

    /// Builder
    pub fn with_pieces(mut self, indices: &[SquareIdx], piece: Piece) -> Result<Self, BoardIndexError> {
        self.place_pieces(indices, piece)?;
        Ok(self)
    }
}

impl Board {
    /// Iterate on the indices of the pieces of a given player
    pub fn iter_player_indices(&self, player: &Player) -> impl Iterator<Item = SquareIdx> {
        self.0.iter().enumerate().filter_map(move |(i, square)| {
            if square.as_ref()?.player == *player {
                let idx = [i / BOARD_SIZE, i % BOARD_SIZE];
                Some(idx)
            } else {
                None
            }
        })
    }

    /// Whether the player has at least one piece left on the board
    pub fn has_pieces(&self, player: &Player) -> bool {
        self.iter_player_indices(player).next().is_some()
    }
}

/// Movements on the board
pub mod movement;

/// Square notation parsing and formatting
pub mod notation;

/// Player pieces
pub mod piece;

/// Board display
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{rank}", rank = BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                match &self[[row, col]] {
                    None => write!(f, " .")?,
                    Some(piece) => write!(f, " {piece}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
