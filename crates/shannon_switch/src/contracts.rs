//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::invariants::{InvariantSet, SwitchInvariants};
use crate::{GameInProgress, Move, MoveError};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move's coordinate lies inside the grid.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside the grid.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.grid().contains(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(mov.coord))
        }
    }
}

/// Precondition: the cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects claimed cells. Assumes [`InBounds`] holds.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.grid().is_empty(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.coord))
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: in bounds, empty, and the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        InBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions: every invariant in [`SwitchInvariants`] holds.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        SwitchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord, GameResult, GameSetup, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameSetup::default().start();
        assert!(MoveContract::pre(&game, &Move::at(Player::X, 3, 3)).is_ok());
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = GameSetup::default().start();
        assert_eq!(
            MoveContract::pre(&game, &Move::at(Player::X, 7, 0)),
            Err(MoveError::OutOfBounds(Coord::new(7, 0)))
        );
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameSetup::default().start();
        if let Ok(GameResult::InProgress(game)) = game.make_move(Move::at(Player::X, 3, 3)) {
            assert!(matches!(
                MoveContract::pre(&game, &Move::at(Player::O, 3, 3)),
                Err(MoveError::CellOccupied(_))
            ));
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::default().start();
        assert!(matches!(
            MoveContract::pre(&game, &Move::at(Player::O, 3, 3)),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::default().start();
        if let Ok(GameResult::InProgress(after)) = game.clone().make_move(Move::at(Player::X, 0, 0)) {
            assert!(MoveContract::post(&game, &after).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::default().start();
        if let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(Move::at(Player::X, 0, 0)) {
            after.grid.overwrite(Coord::new(5, 5), Cell::Occupied(Player::O));
            assert!(matches!(
                MoveContract::post(&game, &after),
                Err(MoveError::InvariantViolation(_))
            ));
        } else {
            panic!("Expected in-progress game");
        }
    }
}
