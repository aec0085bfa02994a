//! Terminal presentation layer.
//!
//! Draws a match into a framebuffer through the small [`Canvas`] contract
//! (tile, text, button) and flushes it to the terminal. It intentionally
//! avoids widget libraries so tile geometry, and therefore mouse hit-testing,
//! stays under our control.
//!
//! - [`fb`]: styled character framebuffer
//! - [`canvas`]: the drawing contract and its framebuffer implementation
//! - [`layout`]: where tiles and buttons are, shared with click resolution
//! - [`game_view`]: snapshot -> canvas calls
//! - [`renderer`]: framebuffer -> terminal (crossterm)

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use duel_sweeper_core as core;
pub use duel_sweeper_types as types;

pub use canvas::{Canvas, FrameCanvas, TextStyle};
pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{player_color, rules_lines, GameView};
pub use layout::{Layout, Screen, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
