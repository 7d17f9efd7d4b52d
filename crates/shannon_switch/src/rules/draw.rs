//! Draw detection.

use super::win::ConnectivityEngine;
use crate::{Grid, Player};
use tracing::instrument;

/// Checks if the grid is full (every cell claimed).
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn is_full(grid: &Grid) -> bool {
    grid.is_full()
}

/// A full grid on which neither player has a spanning chain.
#[instrument(skip(grid, engine), fields(size = grid.size()))]
pub fn is_draw(grid: &Grid, engine: &ConnectivityEngine) -> bool {
    is_full(grid)
        && !engine.evaluate(grid, Player::X).is_win()
        && !engine.evaluate(grid, Player::O).is_win()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Goal, Goals, SearchOrder};

    #[test]
    fn test_empty_grid_not_full() {
        assert!(!is_full(&Grid::new(7)));
    }

    #[test]
    fn test_partial_grid_not_draw() {
        let grid: Grid = "XO.\nOX.\n...".parse().unwrap();
        assert!(!is_full(&grid));
        assert!(!is_draw(&grid, &ConnectivityEngine::default()));
    }

    #[test]
    fn test_full_checkerboard_is_won_by_both() {
        // Under king-move adjacency a full grid always holds a chain for
        // someone: the checkerboard diagonals connect both axes.
        let grid: Grid = "XOX\nOXO\nXOX".parse().unwrap();
        let engine = ConnectivityEngine::default();
        assert!(is_full(&grid));
        assert!(engine.evaluate(&grid, Player::X).is_win());
        assert!(engine.evaluate(&grid, Player::O).is_win());
        assert!(!is_draw(&grid, &engine));
    }

    #[test]
    fn test_full_grid_without_chain_is_draw() {
        // Both players connect top to bottom; O's middle row cuts X off and
        // touches neither of those edges.
        let goal = Goal::new(Edge::Top, Edge::Bottom);
        let engine = ConnectivityEngine::new(Goals { x: goal, o: goal }, SearchOrder::DepthFirst);
        let grid: Grid = "XXX\nOOO\nXXX".parse().unwrap();
        assert!(is_draw(&grid, &engine));
    }

    #[test]
    fn test_full_grid_with_winner_is_not_draw() {
        let grid: Grid = "XXX\nOOX\nXOO".parse().unwrap();
        assert!(is_full(&grid));
        assert!(!is_draw(&grid, &ConnectivityEngine::default()));
    }
}
