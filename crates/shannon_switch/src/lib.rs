//! Pure game logic for a Shannon-switching-style connection game.
//!
//! Two players claim cells of an N×N grid in turn. X wins by joining the left
//! and right columns with a chain of king-move-adjacent marks, O by joining
//! the top and bottom rows. Both the grid size and the edge assignment are
//! configurable.
//!
//! # Architecture
//!
//! - **Grid**: cell storage ([`Grid`], [`Cell`], [`Coord`])
//! - **Rules**: connectivity engine and draw detection ([`rules`])
//! - **Round**: typestate lifecycle with contracts ([`GameSetup`],
//!   [`GameInProgress`], [`GameFinished`])
//! - **Session**: current round plus scores ([`Session`])
//!
//! # Example
//!
//! ```
//! use shannon_switch::{Grid, Player, evaluate};
//!
//! let grid: Grid = "X..\n.X.\n..X".parse().unwrap();
//! let verdict = evaluate(&grid, Player::X);
//! assert_eq!(verdict.path().map(|p| p.len()), Some(3));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
pub mod contracts;
mod edge;
mod grid;
pub mod invariants;
mod path;
mod phases;
pub mod rules;
mod session;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use config::{ConfigError, DEFAULT_RESET_DELAY_MS, DEFAULT_SIZE, GameConfig, MAX_SIZE};
pub use contracts::LegalMove;
pub use edge::{Edge, Goal, Goals};
pub use grid::{Grid, ParseGridError};
pub use path::{Verdict, WinningPath};
pub use phases::Outcome;
pub use rules::{ConnectivityEngine, SearchOrder, evaluate};
pub use session::{Scores, Session, Status};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{Cell, Coord, Player};
