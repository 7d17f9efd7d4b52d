//! Monotonic board invariant: cells never change once claimed.

use super::Invariant;
use crate::{GameInProgress, Grid};

/// Invariant: cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty grid must place every mark on an
/// empty cell and reproduce the current grid exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Grid::new(game.grid().size());

        for mov in game.history() {
            if !reconstructed.contains(mov.coord) || !reconstructed.is_empty(mov.coord) {
                return false;
            }
            reconstructed.set(mov.coord, mov.player);
        }

        reconstructed == *game.grid()
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten)"
    }
}
