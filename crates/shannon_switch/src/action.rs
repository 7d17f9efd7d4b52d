//! First-class move events.
//!
//! A move records the player's intent; it is validated against the round
//! before it touches the grid.

use crate::{Coord, Player};
use serde::{Deserialize, Serialize};

/// A player claiming a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell being claimed.
    pub coord: Coord,
}

impl Move {
    /// Shorthand for a move at `(row, col)`.
    pub fn at(player: Player, row: usize, col: usize) -> Self {
        Self::new(player, Coord::new(row, col))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the grid.
    #[display("Cell {} is outside the grid", _0)]
    OutOfBounds(Coord),

    /// The cell is already claimed.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The round has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// It is not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::at(Player::O, 2, 5).to_string(), "O -> (2, 5)");
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::CellOccupied(Coord::new(1, 1)).to_string(),
            "Cell (1, 1) is already occupied"
        );
        assert_eq!(MoveError::WrongPlayer(Player::X).to_string(), "It's not X's turn");
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
