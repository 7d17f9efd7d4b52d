//! Grid edges and the pair of edges each player must connect.

use crate::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One side of the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Row 0.
    Top,
    /// Row `size - 1`.
    Bottom,
    /// Column 0.
    Left,
    /// Column `size - 1`.
    Right,
}

impl Edge {
    /// The edge across the grid from this one.
    pub fn opposite(self) -> Self {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// Returns true if `coord` lies on this edge of a `size`×`size` grid.
    pub fn contains(self, coord: Coord, size: usize) -> bool {
        let last = size.saturating_sub(1);
        match self {
            Edge::Top => coord.row == 0,
            Edge::Bottom => coord.row == last,
            Edge::Left => coord.col == 0,
            Edge::Right => coord.col == last,
        }
    }

    /// All coordinates on this edge, in increasing row/column order.
    pub fn coords(self, size: usize) -> impl Iterator<Item = Coord> {
        let last = size.saturating_sub(1);
        (0..size).map(move |i| match self {
            Edge::Top => Coord::new(0, i),
            Edge::Bottom => Coord::new(last, i),
            Edge::Left => Coord::new(i, 0),
            Edge::Right => Coord::new(i, last),
        })
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// The edges one player connects: search starts on `start`, wins on `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    /// Edge the reachability search is seeded from.
    pub start: Edge,
    /// Edge that completes the chain.
    pub target: Edge,
}

impl Goal {
    /// Creates a goal between two edges.
    pub fn new(start: Edge, target: Edge) -> Self {
        Self { start, target }
    }

    /// Returns true if the edges face each other across the grid.
    pub fn is_spanning(&self) -> bool {
        self.start.opposite() == self.target
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.target)
    }
}

/// Goal assignment for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    /// X's edges (left to right by default).
    pub x: Goal,
    /// O's edges (top to bottom by default).
    pub o: Goal,
}

impl Goals {
    /// Returns the goal of `player`.
    #[instrument(level = "trace")]
    pub fn of(&self, player: Player) -> Goal {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            x: Goal::new(Edge::Left, Edge::Right),
            o: Goal::new(Edge::Top, Edge::Bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opposite_is_involution() {
        for edge in Edge::iter() {
            assert_ne!(edge.opposite(), edge);
            assert_eq!(edge.opposite().opposite(), edge);
        }
    }

    #[test]
    fn test_edge_coords_lie_on_edge() {
        for edge in Edge::iter() {
            let coords: Vec<_> = edge.coords(5).collect();
            assert_eq!(coords.len(), 5);
            assert!(coords.iter().all(|c| edge.contains(*c, 5)));
        }
    }

    #[test]
    fn test_default_goals() {
        let goals = Goals::default();
        assert_eq!(goals.of(Player::X), Goal::new(Edge::Left, Edge::Right));
        assert_eq!(goals.of(Player::O), Goal::new(Edge::Top, Edge::Bottom));
        assert!(goals.x.is_spanning());
        assert!(goals.o.is_spanning());
    }

    #[test]
    fn test_adjacent_edges_do_not_span() {
        assert!(!Goal::new(Edge::Top, Edge::Left).is_spanning());
        assert!(!Goal::new(Edge::Right, Edge::Right).is_spanning());
    }
}
