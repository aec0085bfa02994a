//! A single board cell.

use crate::types::{TileKind, TileVisual};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    kind: TileKind,
    revealed: bool,
    flagged: bool,
    /// Set on the one mine whose reveal ended the match
    detonated: bool,
}

impl Tile {
    pub(crate) fn new(kind: TileKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn is_detonated(&self) -> bool {
        self.detonated
    }

    pub(crate) fn set_kind(&mut self, kind: TileKind) {
        debug_assert!(!self.revealed, "kind of a revealed tile is fixed");
        self.kind = kind;
    }

    pub(crate) fn set_revealed(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub(crate) fn set_detonated(&mut self) {
        self.detonated = true;
    }

    /// Visual state for the presentation layer
    pub fn visual(&self) -> TileVisual {
        if !self.revealed {
            return if self.flagged {
                TileVisual::Flagged
            } else {
                TileVisual::Unknown
            };
        }

        match self.kind {
            TileKind::Mine if self.detonated => TileVisual::ExplodedMine,
            TileKind::Mine => TileVisual::Mine,
            _ if self.flagged => TileVisual::WronglyFlagged,
            TileKind::Hint(n) => TileVisual::Hint(n),
            TileKind::Empty => TileVisual::Empty,
        }
    }
}
