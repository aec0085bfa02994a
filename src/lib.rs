//! Duel Sweeper (workspace facade crate).
//!
//! Re-exports the workspace crates as `duel_sweeper::{core,input,term,types}`
//! and hosts the front-end glue ([`app`]) and run options ([`config`]) used by
//! the binary.

pub mod app;
pub mod config;

pub use duel_sweeper_core as core;
pub use duel_sweeper_input as input;
pub use duel_sweeper_term as term;
pub use duel_sweeper_types as types;
