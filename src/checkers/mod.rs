use std::fmt::{Debug, Display};

use thiserror::Error;

use crate::checkers::board::{
    Board, SquareIdx,
    movement::{Movement, MovementError},
    piece::Player,
};

/// Checkers board and rules
pub mod board;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player captured all of the opponent's pieces
    Won { winner: Player },
    /// The player to move has no available movement
    Stalemate { loser: Player },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { winner } => write!(f, "{winner} wins!"),
            Outcome::Stalemate { loser } => write!(f, "{loser} has no moves. Game over."),
        }
    }
}

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for a movement from the given player
    Playing(Player),
    /// Game finished
    Finished(Outcome),
}

/// Errors rejecting a turn
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// Movement made after the game is finished
    #[error("The game is already over")]
    GameFinished,
    /// Movement rejected by the board rules
    #[error(transparent)]
    Movement(#[from] MovementError),
}

/// A game of checkers: the board plus whose turn it is
#[derive(Debug)]
pub struct Game {
    /// Board state
    board: Board,
    /// Player to move
    turn: Player,
}

impl Game {
    /// New game on the starting position
    /// Black moves first
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Black,
        }
    }

    /// Game starting from an arbitrary position
    pub const fn from_position(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// Current status, applying the termination rules in order:
    /// a player with no pieces left has lost, and the player to move
    /// loses when no movement is available to them
    pub fn status(&self) -> GameStatus {
        if !self.board.has_pieces(&Player::Black) {
            GameStatus::Finished(Outcome::Won {
                winner: Player::White,
            })
        } else if !self.board.has_pieces(&Player::White) {
            GameStatus::Finished(Outcome::Won {
                winner: Player::Black,
            })
        } else if !self.board.has_movements(&self.turn) {
            GameStatus::Finished(Outcome::Stalemate { loser: self.turn })
        } else {
            GameStatus::Playing(self.turn)
        }
    }

    /// Play a turn: move the current player's piece from `from` to `to`
    /// On success the turn passes to the opponent, on error nothing changes
    pub fn play(&mut self, from: SquareIdx, to: SquareIdx) -> Result<GameStatus, TurnError> {
        let GameStatus::Playing(player) = self.status() else {
            return Err(TurnError::GameFinished);
        };

        let _movement: Movement = self.board.move_piece(from, to, player)?;
        self.turn = player.opponent();

        Ok(self.status())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.status() {
            GameStatus::Playing(player) => write!(f, "Current player: {player}")?,
            GameStatus::Finished(outcome) => write!(f, "{outcome}")?,
        }
        Ok(())
    }
}
