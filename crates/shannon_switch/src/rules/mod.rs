//! Game rules for the switching game.
//!
//! Pure functions over a [`crate::Grid`]: neighborhood, win detection with
//! path reconstruction, and draw detection. Rules are kept apart from grid
//! storage so the round lifecycle and contracts can compose them.

pub mod adjacency;
pub mod draw;
pub mod win;

pub use adjacency::{Neighbors, neighbors};
pub use draw::{is_draw, is_full};
pub use win::{ConnectivityEngine, SearchOrder, evaluate};
