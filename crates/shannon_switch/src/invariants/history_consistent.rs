//! History consistency invariant: one claimed cell per recorded move.

use super::Invariant;
use crate::{Cell, GameInProgress};

/// Invariant: the number of claimed cells equals the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let filled = game
            .grid()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();
        filled == game.history().len()
    }

    fn description() -> &'static str {
        "History length matches claimed cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameResult, GameSetup, Move, Player};

    #[test]
    fn test_after_move_holds() {
        let game = GameSetup::default().start();
        match game.make_move(Move::at(Player::X, 4, 0)) {
            Ok(GameResult::InProgress(game)) => assert!(HistoryConsistentInvariant::holds(&game)),
            _ => panic!("Expected in-progress game"),
        }
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut game = GameSetup::default().start();
        game.grid.overwrite(Coord::new(0, 0), Cell::Occupied(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
