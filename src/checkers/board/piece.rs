use std::fmt::{Debug, Display};

use crate::checkers::board::{BOARD_SIZE, Direction};

/// Checkers players
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// List all player variants
    pub const fn variants() -> [Player; 2] {
        [Player::Black, Player::White]
    }

    pub const fn opponent(&self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Row delta of one forward step
    /// Black starts on the top rows and advances down the board
    pub const fn forward(&self) -> isize {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// Row on which this player's pieces are crowned
    pub const fn crowning_row(&self) -> usize {
        match self {
            Player::Black => BOARD_SIZE - 1,
            Player::White => 0,
        }
    }

    /// Letter used for this player's pieces on the board display
    pub const fn letter(&self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "Black"),
            Self::White => write!(f, "White"),
        }
    }
}

/// A piece on the board
/// Kings are ordinary pieces with the `king` flag set
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Piece {
    pub player: Player,
    pub king: bool,
}

impl Piece {
    /// A man (uncrowned piece)
    pub const fn new(player: Player) -> Self {
        Self {
            player,
            king: false,
        }
    }

    /// A crowned piece
    pub const fn crowned(player: Player) -> Self {
        Self { player, king: true }
    }

    /// Crown the piece
    /// Crowning is permanent, re-crowning a king is a no-op
    pub fn crown(&mut self) {
        self.king = true;
    }

    /// Directions the piece may move in
    /// Men only move toward the opponent, kings move on all four diagonals
    pub const fn directions(&self) -> &'static [Direction] {
        match (self.king, self.player) {
            (true, _) => &[
                Direction::SW,
                Direction::SE,
                Direction::NW,
                Direction::NE,
            ],
            (false, Player::Black) => &[Direction::SW, Direction::SE],
            (false, Player::White) => &[Direction::NW, Direction::NE],
        }
    }
}

impl Display for Piece {
    /// Two character glyph: player letter plus king marker
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{letter}{marker}",
            letter = self.player.letter(),
            marker = if self.king { 'K' } else { ' ' }
        )
    }
}
