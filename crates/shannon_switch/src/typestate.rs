//! Phase-specific typestate structs for one round.
//!
//! Each phase is its own type with phase-specific fields. A finished round
//! always carries an outcome, and only a round in progress accepts moves.

use crate::contracts::{Contract, MoveContract};
use crate::{
    ConnectivityEngine, Coord, GameConfig, Grid, Move, MoveError, Outcome, Player, Verdict,
    WinningPath, rules,
};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round in setup phase, ready to start.
///
/// The grid is always empty.
#[derive(Debug, Clone)]
pub struct GameSetup {
    grid: Grid,
    engine: ConnectivityEngine,
}

impl GameSetup {
    /// Creates a round sized and scored according to `config`.
    #[instrument(skip(config), fields(size = *config.size()))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid: Grid::new(*config.size()),
            engine: config.engine(),
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Starts the round with X to move.
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            grid: self.grid,
            engine: self.engine,
            history: Vec::new(),
            to_move: Player::X,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress, accepting moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) grid: Grid,
    pub(crate) engine: ConnectivityEngine,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// After the mark is placed the connectivity engine is run for the mover.
    /// A spanning chain finishes the round as a win; otherwise a full grid
    /// finishes it as a draw; otherwise the turn passes.
    ///
    /// Preconditions are always checked. Invariants are checked after the
    /// move in debug builds, including the move that finishes the round.
    #[instrument(skip(self), fields(to_move = %self.to_move, moves = self.history.len()))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.grid.set(action.coord, action.player);
        game.history.push(action);
        game.to_move = game.to_move.opponent();
        debug!(%action, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        if let Verdict::Win(path) = game.engine.evaluate(&game.grid, action.player) {
            info!(player = %action.player, length = path.len(), "Round won");
            return Ok(GameResult::Finished(GameFinished {
                grid: game.grid,
                engine: game.engine,
                history: game.history,
                outcome: Outcome::Winner {
                    player: action.player,
                    path,
                },
            }));
        }

        if rules::is_full(&game.grid) {
            info!(moves = game.history.len(), "Round drawn");
            return Ok(GameResult::Finished(GameFinished {
                grid: game.grid,
                engine: game.engine,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        Ok(GameResult::InProgress(game))
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the connectivity engine the round is scored with.
    pub fn engine(&self) -> &ConnectivityEngine {
        &self.engine
    }

    /// Returns the unclaimed cells.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.grid.empty_coords()
    }

    /// Replays `moves` from a fresh round.
    ///
    /// Stops at the first move that finishes the round.
    #[instrument(skip(config, moves), fields(moves = moves.len()))]
    pub fn replay(config: &GameConfig, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(config).start();

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished with a won or drawn outcome.
///
/// The grid is frozen until [`GameFinished::restart`].
#[derive(Debug, Clone)]
pub struct GameFinished {
    grid: Grid,
    engine: ConnectivityEngine,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the winning chain, if the round was won.
    pub fn winning_path(&self) -> Option<&WinningPath> {
        self.outcome.path()
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts with an empty grid of the same size and the same rules.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        let mut grid = self.grid;
        grid.reset();
        GameSetup {
            grid,
            engine: self.engine,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone)]
pub enum GameResult {
    /// Round continues.
    InProgress(GameInProgress),
    /// Round finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the grid of either phase.
    pub fn grid(&self) -> &Grid {
        match self {
            GameResult::InProgress(game) => game.grid(),
            GameResult::Finished(game) => game.grid(),
        }
    }
}
