//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board and the match rules of a two-player,
//! turn-timed mine-discovery game. It has **no dependencies** on terminals,
//! rendering or input devices:
//!
//! - **Deterministic**: the same seed produces the same boards
//! - **Testable**: time is passed in as `Instant`s, never read from a clock
//! - **Portable**: any presentation layer can drive it through [`Match`]
//!
//! # Module Structure
//!
//! - [`tile`]: single cell state (kind, revealed, flagged)
//! - [`board`]: mine placement, hint counts and the flood-fill reveal
//! - [`game_state`]: the [`Match`] state machine (turns, timer, scores, winner)
//! - [`rng`]: seedable generator used for mine placement
//! - [`snapshot`]: render-ready copy of a match
//!
//! # Game Rules
//!
//! - Players alternate fixed-length turns (10 s by default)
//! - A turn's timer only starts at the player's first click or flag
//! - Every tile a player reveals scores 1 point (flags score nothing)
//! - Revealing a mine hands the win to the other player
//! - Clearing the board gives the clearing player `rows * cols / 10` bonus
//!   points; the higher score wins and ties go to player 2
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use duel_sweeper_core::{Board, Match};
//! use duel_sweeper_types::{GameConfig, Player, PointerButton};
//!
//! let board = Board::from_mines(4, 4, &[(0, 0)]).unwrap();
//! let mut game = Match::with_board(GameConfig::default(), board, 1).unwrap();
//!
//! game.click(3, 3, PointerButton::Left, Instant::now());
//!
//! assert!(game.is_over());
//! assert_eq!(game.winner(), Some(Player::One));
//! assert_eq!(game.scores(), [16, 0]);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use duel_sweeper_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{Match, Phase};
pub use rng::SimpleRng;
pub use snapshot::{MatchSnapshot, PhaseView};
pub use tile::Tile;
