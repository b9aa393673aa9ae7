use thiserror::Error;

use crate::checkers::board::{Board, BoardIndexError, SquareIdx, piece::Player};

/// Movements of a piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Single step to an adjacent diagonal square
    Step { from: SquareIdx, to: SquareIdx },
    /// Jump over an adjacent opposing piece, capturing it
    Jump {
        from: SquareIdx,
        /// Square of the captured piece
        over: SquareIdx,
        to: SquareIdx,
    },
}

impl Movement {
    /// Destination square of the movement
    pub const fn destination(&self) -> SquareIdx {
        match self {
            Movement::Step { to, .. } | Movement::Jump { to, .. } => *to,
        }
    }
}

impl Board {
    /// List all movements available to the piece at index `idx`
    /// An empty square yields no movements
    pub fn available_movements_from(&self, idx: SquareIdx) -> Vec<Movement> {
        let Ok(Some(piece)) = self.get(&idx).map(|square| square.as_ref()) else {
            return Vec::new();
        };

        let mut movements = Vec::new();
        for &direction in piece.directions() {
            // Empty adjacent square => We can step there
            if let Some((next_idx, next_square)) = self.neighbor(idx, direction)
                && next_square.is_none()
            {
                movements.push(Movement::Step {
                    from: idx,
                    to: next_idx,
                });
            }
            // Adjacent opposing piece with an empty square behind it => We can
            // jump over it. Offered whether or not the step is available, and
            // never mandatory.
            if let Some((over_idx, over_square)) = self.neighbor(idx, direction)
                && over_square.is_some_and(|p| p.player != piece.player)
                && let Some((to_idx, to_square)) = self.neighbor(over_idx, direction)
                && to_square.is_none()
            {
                movements.push(Movement::Jump {
                    from: idx,
                    over: over_idx,
                    to: to_idx,
                });
            }
        }
        movements
    }

    /// Iterate over all available movements for a player
    pub fn iter_player_movements(&self, player: &Player) -> impl Iterator<Item = Movement> {
        self.iter_player_indices(player)
            .flat_map(move |idx| self.available_movements_from(idx))
    }

    /// Whether the player has at least one available movement
    pub fn has_movements(&self, player: &Player) -> bool {
        self.iter_player_indices(player)
            .any(|idx| !self.available_movements_from(idx).is_empty())
    }
}

/// Errors rejecting an attempted movement
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MovementError {
    /// A square is outside the board, the start is empty or the destination occupied
    #[error(transparent)]
    Index(#[from] BoardIndexError),
    /// The starting piece belongs to the opponent
    #[error("Piece belongs to the opponent")]
    OutOfTurn,
    /// The destination is not a diagonal step or jump away
    #[error("Destination is not a diagonal step or jump away")]
    NotDiagonal,
    /// A man moving away from the opponent's side
    #[error("Piece cannot move backwards")]
    Backwards,
    /// Jump without an opposing piece to capture
    #[error("No opposing piece to jump over at {over:?}")]
    NothingToCapture { over: SquareIdx },
}

impl Board {
    /// Validate a movement from `from` to `to` on behalf of `mover` and
    /// classify it as a step or a jump, leaving the board untouched
    pub fn classify_movement(
        &self,
        from: SquareIdx,
        to: SquareIdx,
        mover: Player,
    ) -> Result<Movement, MovementError> {
        // Check starting square
        let piece = self
            .get(&from)?
            .as_ref()
            .ok_or(BoardIndexError::Empty(from))?;
        if piece.player != mover {
            return Err(MovementError::OutOfTurn);
        }

        // Check destination square
        if self.get(&to)?.is_some() {
            return Err(BoardIndexError::Occupied(to).into());
        }

        let dr = to[0] as isize - from[0] as isize;
        let dc = to[1] as isize - from[1] as isize;
        let forward = mover.forward();

        match (dr.abs(), dc.abs()) {
            (1, 1) => {
                if piece.king || dr == forward {
                    Ok(Movement::Step { from, to })
                } else {
                    Err(MovementError::Backwards)
                }
            }
            (2, 2) => {
                // Midpoint of two on-board squares is on the board
                let over = [
                    (from[0] as isize + dr / 2) as usize,
                    (from[1] as isize + dc / 2) as usize,
                ];
                match self[over] {
                    Some(captured) if captured.player != mover => {
                        if piece.king || dr == 2 * forward {
                            Ok(Movement::Jump { from, over, to })
                        } else {
                            Err(MovementError::Backwards)
                        }
                    }
                    _ => Err(MovementError::NothingToCapture { over }),
                }
            }
            _ => Err(MovementError::NotDiagonal),
        }
    }

    /// Execute a classified movement: relocate the piece, remove the
    /// captured piece on a jump, then crown the piece if it reached the
    /// far row
    fn apply_movement(&mut self, movement: Movement) {
        match movement {
            Movement::Step { from, to } => {
                let piece = self[from].take();
                self[to] = piece;
            }
            Movement::Jump { from, over, to } => {
                let piece = self[from].take();
                self[over] = None;
                self[to] = piece;
            }
        }
        self.crown_piece(movement.destination());
    }

    /// Crown the piece at `idx` if it stands on its player's crowning row
    fn crown_piece(&mut self, idx: SquareIdx) {
        if let Some(piece) = self[idx].as_mut()
            && piece.player.crowning_row() == idx[0]
        {
            piece.crown();
        }
    }

    /// Attempt to move the piece at `from` to `to` on behalf of `mover`
    /// On any rule violation the board is left untouched
    pub fn move_piece(
        &mut self,
        from: SquareIdx,
        to: SquareIdx,
        mover: Player,
    ) -> Result<Movement, MovementError> {
        let movement = self.classify_movement(from, to, mover)?;
        self.apply_movement(movement);
        Ok(movement)
    }
}
