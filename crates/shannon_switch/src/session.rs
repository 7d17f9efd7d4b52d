//! Thin mutable session: the current round plus the score tally.
//!
//! The session is the caller-facing gate for moves. It refuses placements
//! once a round is won or drawn, and only a reset starts a new round.

use crate::contracts::LegalMove;
use crate::{
    Coord, GameConfig, GameFinished, GameResult, GameSetup, Grid, Move, MoveError, Outcome,
    Player, WinningPath,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Rounds won by each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
}

impl Scores {
    /// Rounds won by `player`.
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// What the front end should announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Round in progress; this player moves next.
    Turn(Player),
    /// Round won by this player.
    Won(Player),
    /// Round drawn.
    Draw,
}

impl Status {
    /// Returns true once the round is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Turn(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Turn(player) => write!(f, "Player {} to move", player),
            Status::Won(player) => write!(f, "Player {} wins!", player),
            Status::Draw => write!(f, "Draw!"),
        }
    }
}

/// A game session: configuration, current round, and scores.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    round: GameResult,
    scores: Scores,
}

impl Session {
    /// Creates a session and starts its first round.
    #[instrument(skip(config), fields(size = *config.size()))]
    pub fn new(config: GameConfig) -> Self {
        info!("Creating new session");
        let round = GameResult::InProgress(GameSetup::new(&config).start());
        Self {
            config,
            round,
            scores: Scores::default(),
        }
    }

    /// Places the current player's mark at `coord`.
    ///
    /// Rejected with [`MoveError::GameOver`] once the round is finished, and
    /// with [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`] for bad
    /// cells. A rejected move leaves the session unchanged.
    #[instrument(skip(self), fields(moves = self.history().len()))]
    pub fn place(&mut self, coord: Coord) -> Result<Status, MoveError> {
        let game = match &self.round {
            GameResult::InProgress(game) => game,
            GameResult::Finished(_) => {
                warn!(%coord, "Move rejected, round is over");
                return Err(MoveError::GameOver);
            }
        };

        let action = Move::new(game.to_move(), coord);
        if let Err(e) = LegalMove::check(&action, game) {
            warn!(%action, error = %e, "Move rejected");
            return Err(e);
        }

        self.round = game.clone().make_move(action)?;

        let status = self.status();
        if let Status::Won(player) = status {
            self.scores.record_win(player);
            info!(%player, x = self.scores.x, o = self.scores.o, "Score updated");
        }
        Ok(status)
    }

    /// Current status of the round.
    pub fn status(&self) -> Status {
        match &self.round {
            GameResult::InProgress(game) => Status::Turn(game.to_move()),
            GameResult::Finished(game) => match game.outcome() {
                Outcome::Winner { player, .. } => Status::Won(*player),
                Outcome::Draw => Status::Draw,
            },
        }
    }

    /// Starts a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting round");
        self.round = GameResult::InProgress(GameSetup::new(&self.config).start());
    }

    /// Grid of the current round.
    pub fn grid(&self) -> &Grid {
        self.round.grid()
    }

    /// Winning chain of the current round, if it has been won.
    pub fn winning_path(&self) -> Option<&WinningPath> {
        self.finished().and_then(GameFinished::winning_path)
    }

    /// Returns true once the round is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.finished().is_some()
    }

    /// Moves played this round.
    pub fn history(&self) -> &[Move] {
        match &self.round {
            GameResult::InProgress(game) => game.history(),
            GameResult::Finished(game) => game.history(),
        }
    }

    /// Score tally across rounds.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn finished(&self) -> Option<&GameFinished> {
        match &self.round {
            GameResult::Finished(game) => Some(game),
            GameResult::InProgress(_) => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
