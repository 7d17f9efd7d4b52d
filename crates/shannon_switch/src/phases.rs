//! Outcome of a finished round.

use crate::{Player, WinningPath};
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player connected their edges.
    Winner {
        /// The winning player.
        player: Player,
        /// Cells to highlight.
        path: WinningPath,
    },
    /// The grid filled up with no chain.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning chain if there is one.
    pub fn path(&self) -> Option<&WinningPath> {
        match self {
            Outcome::Winner { path, .. } => Some(path),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
