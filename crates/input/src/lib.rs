//! Terminal input module.
//!
//! Translates `crossterm` mouse and key events into the abstract
//! [`InputEvent`](crate::types::InputEvent)s and
//! [`Command`](crate::types::Command)s the game understands, and resolves
//! clicked screen regions into commands through a fixed dispatch table.

pub mod dispatch;
pub mod map;

pub use duel_sweeper_types as types;

pub use dispatch::dispatch;
pub use map::{handle_key_event, map_event, map_mouse_event, should_quit, Mapped};
