//! Match module - turn rotation, countdown, scoring and win/loss
//!
//! A `Match` owns the board of one game session and decides what each click
//! means: whose score it feeds, whether it starts the turn timer, and whether
//! it ends the game. Time is passed in explicitly as `Instant`s so the state
//! machine stays deterministic under test.
//!
//! ```text
//! AwaitingFirstMove --click--> TurnInProgress --timer expired--> TurnBoundaryPause
//!        ^                          |                                   |
//!        +--------------------------|-------------- pause elapsed -----+
//!                                   +--mine / board cleared--> GameOver
//! ```

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::{MatchSnapshot, PhaseView};
use crate::types::{Command, ConfigError, EndCause, GameConfig, Player, PointerButton};

/// Where a match is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The current player has not clicked yet this turn; the timer is stopped
    AwaitingFirstMove,
    TurnInProgress { started_at: Instant },
    /// Input is frozen while the "switch player" notice is shown
    TurnBoundaryPause { until: Instant },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Match {
    config: GameConfig,
    board: Board,
    rng: SimpleRng,
    seed: u64,
    /// Monotonic game id (increments on new game)
    episode_id: u32,
    current_player: Player,
    scores: [u32; 2],
    phase: Phase,
    winner: Option<Player>,
    cause: Option<EndCause>,
    /// Countdown value when the match ended, kept on screen afterwards
    final_seconds: u64,
}

impl Match {
    /// Start a match on a random board drawn from `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(config.rows, config.cols, config.mines, &mut rng)?;
        info!(
            "new match: {}x{} board, {} mines, seed {}",
            config.rows, config.cols, config.mines, seed
        );
        Ok(Self::assemble(config, board, rng, seed))
    }

    /// Start a match on a prepared board.
    ///
    /// Geometry is taken from the board; the timing fields of `config` are
    /// kept. Later new games draw random boards from `seed`.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self, ConfigError> {
        let config = GameConfig {
            rows: board.rows(),
            cols: board.cols(),
            mines: board.mine_count(),
            ..config
        };
        config.validate()?;
        Ok(Self::assemble(config, board, SimpleRng::new(seed), seed))
    }

    fn assemble(config: GameConfig, board: Board, rng: SimpleRng, seed: u64) -> Self {
        Self {
            config,
            board,
            rng,
            seed,
            episode_id: 0,
            current_player: Player::One,
            scores: [0, 0],
            phase: Phase::AwaitingFirstMove,
            winner: None,
            cause: None,
            final_seconds: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn cause(&self) -> Option<EndCause> {
        self.cause
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// When the running turn started, if the timer is running
    pub fn turn_started_at(&self) -> Option<Instant> {
        match self.phase {
            Phase::TurnInProgress { started_at } => Some(started_at),
            _ => None,
        }
    }

    /// Whole seconds left on the turn clock, clamped at zero.
    ///
    /// Shows the full turn length before the first move of a turn and the
    /// last value shown once the match is over.
    pub fn remaining_seconds(&self, now: Instant) -> u64 {
        let turn = self.config.turn_length.as_secs();
        match self.phase {
            Phase::TurnInProgress { started_at } => {
                let elapsed = now.saturating_duration_since(started_at).as_secs();
                turn.saturating_sub(elapsed)
            }
            Phase::TurnBoundaryPause { .. } => 0,
            Phase::GameOver => self.final_seconds,
            Phase::AwaitingFirstMove => turn,
        }
    }

    /// Handle a click on tile `(row, col)`.
    ///
    /// Returns true when the click qualified (the match was accepting input
    /// and the tile is on the board). Qualifying clicks start the turn timer,
    /// flags included.
    pub fn click(&mut self, row: usize, col: usize, button: PointerButton, now: Instant) -> bool {
        if !self.accepts_clicks() || !self.board.is_in_bounds(row, col) {
            return false;
        }

        if self.phase == Phase::AwaitingFirstMove {
            debug!("player {} turn timer started", self.current_player.number());
            self.phase = Phase::TurnInProgress { started_at: now };
        }

        match button {
            PointerButton::Left => self.reveal_at(row, col, now),
            PointerButton::Right => self.flag_at(row, col),
        }

        if !self.is_over() && self.board.all_safe_revealed() {
            self.finish_cleared(now);
        }

        true
    }

    fn accepts_clicks(&self) -> bool {
        matches!(
            self.phase,
            Phase::AwaitingFirstMove | Phase::TurnInProgress { .. }
        )
    }

    fn reveal_at(&mut self, row: usize, col: usize, now: Instant) {
        let tile = self.board[(row, col)];
        if tile.is_flagged() {
            return;
        }

        if tile.is_mine() {
            self.board.explode(row, col);
            self.end(self.current_player.other(), EndCause::MineTriggered, now);
            return;
        }

        let revealed = self.board.reveal(row, col) as u32;
        if revealed > 0 {
            self.scores[self.current_player.index()] += revealed;
            debug!(
                "player {} revealed {} tiles at ({}, {})",
                self.current_player.number(),
                revealed,
                row,
                col
            );
        }
    }

    fn flag_at(&mut self, row: usize, col: usize) {
        if self.board.toggle_flag(row, col) {
            debug!(
                "player {} toggled flag at ({}, {})",
                self.current_player.number(),
                row,
                col
            );
        }
    }

    fn finish_cleared(&mut self, now: Instant) {
        self.board.flag_remaining();
        self.scores[self.current_player.index()] += self.config.clear_bonus();

        // Ties go to player 2.
        let winner = if self.scores[0] > self.scores[1] {
            Player::One
        } else {
            Player::Two
        };
        self.end(winner, EndCause::BoardCleared, now);
    }

    fn end(&mut self, winner: Player, cause: EndCause, now: Instant) {
        self.final_seconds = self.remaining_seconds(now);
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
        self.cause = Some(cause);
        info!(
            "match over ({}): player {} wins, scores {:?}",
            cause.as_str(),
            winner.number(),
            self.scores
        );
    }

    /// Advance timers. Call once per frame.
    ///
    /// Returns true when the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::TurnInProgress { started_at }
                if now.saturating_duration_since(started_at) >= self.config.turn_length =>
            {
                self.current_player = self.current_player.other();
                self.phase = Phase::TurnBoundaryPause {
                    until: now + self.config.switch_pause,
                };
                info!("turn over, player {} is up", self.current_player.number());
                true
            }
            Phase::TurnBoundaryPause { until } if now >= until => {
                self.phase = Phase::AwaitingFirstMove;
                true
            }
            _ => false,
        }
    }

    /// Time left on the "switch player" notice
    pub fn pause_remaining(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            Phase::TurnBoundaryPause { until } => Some(until.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Replace the board and reset players, scores and timer
    pub fn new_game(&mut self) {
        let config = self.config;
        // The config was validated on construction, so generation cannot fail.
        let board = match Board::generate(config.rows, config.cols, config.mines, &mut self.rng) {
            Ok(board) => board,
            Err(err) => unreachable!("validated config rejected: {err}"),
        };
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::assemble(config, board, self.rng.clone(), self.seed);
        self.episode_id = next_episode;
        info!("new game #{}", self.episode_id);
    }

    /// Apply a board command; front-end commands are ignored.
    ///
    /// Returns true when the command had an effect.
    pub fn apply(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Reveal { row, col } => self.click(row, col, PointerButton::Left, now),
            Command::ToggleFlag { row, col } => self.click(row, col, PointerButton::Right, now),
            Command::NewGame => {
                self.new_game();
                true
            }
            Command::ShowRules | Command::HideRules | Command::Quit => false,
        }
    }

    pub fn snapshot_into(&self, now: Instant, out: &mut MatchSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().map(|t| t.visual()));
        out.current_player = self.current_player;
        out.scores = self.scores;
        out.phase = match self.phase {
            Phase::AwaitingFirstMove => PhaseView::AwaitingFirstMove,
            Phase::TurnInProgress { .. } => PhaseView::TurnInProgress,
            Phase::TurnBoundaryPause { .. } => PhaseView::SwitchingPlayers,
            Phase::GameOver => PhaseView::GameOver,
        };
        out.remaining_seconds = self.remaining_seconds(now);
        out.turn_seconds = self.config.turn_length.as_secs();
        out.winner = self.winner;
        out.cause = self.cause;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self, now: Instant) -> MatchSnapshot {
        let mut s = MatchSnapshot::default();
        self.snapshot_into(now, &mut s);
        s
    }
}
