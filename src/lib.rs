//! Shannon Games - terminal front end for the connection game.
//!
//! The game rules live in [`shannon_switch`]; this crate adds the pieces a
//! player sees.
//!
//! # Architecture
//!
//! - **CLI**: argument parsing ([`cli`])
//! - **Render**: text grid with the winning chain highlighted ([`render()`])
//! - **Play**: interactive hot-seat loop over any reader and writer ([`play`])
//! - **Check**: one-shot evaluation of a board file ([`check`])
//!
//! # Example
//!
//! ```
//! use shannon_games::render;
//! use shannon_switch::{Grid, Player, evaluate};
//!
//! let grid: Grid = "XO\nXO".parse().unwrap();
//! let verdict = evaluate(&grid, Player::O);
//! assert!(render(&grid, verdict.path()).contains("[O]"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod check;
pub mod cli;
pub mod play;
mod render;

pub use check::{BoardState, Report};
pub use play::{ParseCommandError, PlayCommand};
pub use render::render;
