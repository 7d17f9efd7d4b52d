//! Shannon Games - CLI entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use shannon_games::check;
use shannon_games::cli::{Cli, Command};
use shannon_games::play;
use shannon_switch::{GameConfig, Session};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the board; logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match cli.command {
        Command::Play { config } => run_play(&config),
        Command::Check {
            board,
            config,
            json,
        } => run_check(&board, &config, json),
        Command::Config => run_config(),
    }
}

/// Run an interactive hot-seat game
#[instrument(fields(config = %config_path.display()))]
fn run_play(config_path: &Path) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    info!(size = *config.size(), "Starting hot-seat game");

    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    play::run(&mut session, stdin.lock(), &mut stdout)?;

    info!(x = session.scores().x, o = session.scores().o, "Game closed");
    Ok(())
}

/// Evaluate a board file and print the report
#[instrument(fields(board = %board.display(), config = %config_path.display()))]
fn run_check(board: &Path, config_path: &Path, json: bool) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let mut stdout = std::io::stdout();
    check::run(board, &config, json, &mut stdout)
}

/// Print the default configuration
fn run_config() -> Result<()> {
    print!("{}", GameConfig::default_toml()?);
    Ok(())
}
