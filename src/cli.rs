//! Command-line interface for shannon_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "shannon.toml";

/// Shannon Games - hot-seat connection game on a square grid
#[derive(Parser, Debug)]
#[command(name = "shannon_games")]
#[command(about = "Connect your edges before your opponent does", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game on stdin/stdout
    Play {
        /// Path to game configuration (defaults apply if the file is missing)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Evaluate a board file for both players
    Check {
        /// Board file: one line per row, `X`, `O` or `.` per cell
        board: PathBuf,

        /// Path to game configuration (defaults apply if the file is missing)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration as TOML
    Config,
}
