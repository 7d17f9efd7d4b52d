//! Connectivity verdicts and the witness chain behind a win.

use crate::{Coord, Edge, Goal, Grid, Player};
use serde::{Deserialize, Serialize};

/// Chain of cells that connects a player's two edges.
///
/// Cells are ordered from the start edge to the target edge and each cell is
/// a king-move away from the next. When several chains exist, which one is
/// returned depends on the search order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningPath {
    player: Player,
    cells: Vec<Coord>,
}

impl WinningPath {
    pub(crate) fn new(player: Player, cells: Vec<Coord>) -> Self {
        Self { player, cells }
    }

    /// Player who owns every cell of the chain.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Cells in chain order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Returns true if `coord` is part of the chain.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of cells in the chain.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the chain has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks the chain against `grid`: every cell owned by the player,
    /// consecutive cells adjacent, no repeats, both edges of `goal` touched.
    pub fn is_valid_on(&self, grid: &Grid, goal: Goal) -> bool {
        let size = grid.size();
        let owned = self
            .cells
            .iter()
            .all(|c| grid.contains(*c) && grid.get(*c).is_owned_by(self.player));
        let linked = self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]));
        let mut sorted = self.cells.clone();
        sorted.sort();
        sorted.dedup();
        let distinct = sorted.len() == self.cells.len();
        let touches = |edge: Edge| self.cells.iter().any(|c| edge.contains(*c, size));

        owned && linked && distinct && touches(goal.start) && touches(goal.target)
    }
}

impl<'a> IntoIterator for &'a WinningPath {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Result of one connectivity evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The player has no chain between their edges.
    NoWin,
    /// The player connected their edges; the path is one witness chain.
    Win(WinningPath),
}

impl Verdict {
    /// Returns true for [`Verdict::Win`].
    pub fn is_win(&self) -> bool {
        matches!(self, Verdict::Win(_))
    }

    /// The witness chain, if the verdict is a win.
    pub fn path(&self) -> Option<&WinningPath> {
        match self {
            Verdict::Win(path) => Some(path),
            Verdict::NoWin => None,
        }
    }

    /// Consumes the verdict, returning the witness chain if any.
    pub fn into_path(self) -> Option<WinningPath> {
        match self {
            Verdict::Win(path) => Some(path),
            Verdict::NoWin => None,
        }
    }
}
