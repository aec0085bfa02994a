//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they can be shared by the game
//! logic, the terminal presentation layer and the input mapping.
//!
//! # Board Geometry
//!
//! The board is fixed for every match:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_ROWS` | 16 | Rows (indexed 0-15, top to bottom) |
//! | `BOARD_COLS` | 16 | Columns (indexed 0-15, left to right) |
//! | `BOMB_COUNT` | 40 | Mines placed per board |
//! | `TILE_PX` | 32 | Nominal tile edge in pixels |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TURN_SECONDS` | 10 | Length of one player's turn |
//! | `SWITCH_PAUSE_MS` | 2000 | "Switch player" notice shown between turns |
//! | `TICK_MS` | 16 | Render/input loop interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use duel_sweeper_types::{GameConfig, Player, BOARD_COLS, BOARD_ROWS};
//!
//! let config = GameConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.rows, BOARD_ROWS);
//! assert_eq!(config.cols, BOARD_COLS);
//! assert_eq!(config.clear_bonus(), 25);
//!
//! assert_eq!(Player::One.other(), Player::Two);
//! ```

use std::time::Duration;

use snafu::Snafu;

/// Board height in tiles (16 rows)
pub const BOARD_ROWS: usize = 16;

/// Board width in tiles (16 columns)
pub const BOARD_COLS: usize = 16;

/// Number of mines on every board
pub const BOMB_COUNT: usize = 40;

/// Nominal tile size in pixels
pub const TILE_PX: u16 = 32;

/// Length of one turn in seconds
pub const TURN_SECONDS: u64 = 10;

/// How long the "switch player" notice stays up (2s)
pub const SWITCH_PAUSE_MS: u64 = 2000;

/// Fixed loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Board clear bonus is `rows * cols / CLEAR_BONUS_DIVISOR`
pub const CLEAR_BONUS_DIVISOR: usize = 10;


/// One of the two competing players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent of this player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays such as scores
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Human-facing player number (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// What a tile contains, fixed once the board is generated
///
/// - **Empty**: no adjacent mines, revealing it cascades to its neighbours
/// - **Mine**: ends the game for the player who reveals it
/// - **Hint(n)**: `n` adjacent mines, `n` in 1..=8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Mine,
    Hint(u8),
}

impl TileKind {
    /// Kind for a non-mine tile with `count` neighbouring mines
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_sweeper_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_count(0), TileKind::Empty);
    /// assert_eq!(TileKind::from_count(3), TileKind::Hint(3));
    /// ```
    pub fn from_count(count: u8) -> Self {
        if count == 0 {
            TileKind::Empty
        } else {
            TileKind::Hint(count)
        }
    }

    pub fn is_mine(self) -> bool {
        matches!(self, TileKind::Mine)
    }
}

/// How a tile should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileVisual {
    /// Covered and unflagged
    Unknown,
    Flagged,
    Mine,
    Hint(u8),
    Empty,
    /// The mine whose reveal ended the game
    ExplodedMine,
    /// A flag that was placed on a non-mine, shown after an explosion
    WronglyFlagged,
}

/// Mouse button of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
}

/// Abstract input delivered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer pressed at presentation coordinates `(x, y)`
    PointerDown { x: u16, y: u16, button: PointerButton },
    QuitRequested,
}

/// A clickable area of the screen, resolved by the layout hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Tile { row: usize, col: usize },
    NewGameButton,
    RulesButton,
    BackButton,
}

/// Operations the event loop can request
///
/// Board commands go to the match; the rest are handled by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Left click on a tile
    Reveal { row: usize, col: usize },
    /// Right click on a tile
    ToggleFlag { row: usize, col: usize },
    /// Throw away the current board and start over
    NewGame,
    ShowRules,
    HideRules,
    Quit,
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndCause {
    /// A player revealed a mine; the other player wins
    MineTriggered,
    /// Every non-mine tile is revealed; the higher score wins
    BoardCleared,
}

impl EndCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndCause::MineTriggered => "mine triggered",
            EndCause::BoardCleared => "board cleared",
        }
    }
}

/// Rejected board or timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum ConfigError {
    #[snafu(display("board dimensions must be non-zero"))]
    ZeroDimension,
    #[snafu(display(
        "mine count {mines} must be smaller than the number of tiles ({cells})"
    ))]
    TooManyMines { mines: usize, cells: usize },
    #[snafu(display("turn length must be non-zero"))]
    ZeroTurnLength,
}

/// Immutable match configuration passed to board and match constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
    /// Tile edge in presentation units
    pub tile_px: u16,
    pub turn_length: Duration,
    pub switch_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            mines: BOMB_COUNT,
            tile_px: TILE_PX,
            turn_length: Duration::from_secs(TURN_SECONDS),
            switch_pause: Duration::from_millis(SWITCH_PAUSE_MS),
        }
    }
}

impl GameConfig {
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Points awarded to the player who clears the board
    pub fn clear_bonus(&self) -> u32 {
        (self.cells() / CLEAR_BONUS_DIVISOR) as u32
    }

    /// Check geometry and timing before any board is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.mines >= self.cells() {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells: self.cells(),
            });
        }
        if self.turn_length.is_zero() {
            return Err(ConfigError::ZeroTurnLength);
        }
        Ok(())
    }
}
