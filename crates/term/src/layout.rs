//! Screen layout shared by rendering and pointer hit-testing.
//!
//! Both sides must agree on where every tile and button is, so the view
//! draws from a `Layout` and the event loop resolves clicks with the same one.

use crate::fb::Rect;
use crate::types::Region;

/// Width of the side panel (banner, timer, scores).
pub const PANEL_W: u16 = 26;
/// Gap between the board frame and the side panel.
pub const PANEL_GAP: u16 = 2;
/// Height of the button row under the board.
pub const BUTTON_H: u16 = 3;

/// Which full screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Board,
    Rules,
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub tile_w: u16,
    pub tile_h: u16,
    /// Everything we draw, centred in the viewport
    pub screen: Rect,
    /// Board including its one-cell border
    pub frame: Rect,
    /// Tile area inside the border
    pub board: Rect,
    pub panel: Rect,
    pub rules_button: Rect,
    pub new_game_button: Rect,
    /// Only active on the rules screen
    pub back_button: Rect,
    /// Rules text area, the full viewport width
    pub rules: Rect,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, tile_w: u16, tile_h: u16, viewport: Viewport) -> Self {
        let board_w = cols as u16 * tile_w;
        let board_h = rows as u16 * tile_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        let total_h = frame_h + BUTTON_H;

        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = viewport.height.saturating_sub(total_h) / 2;

        let screen = Rect::new(x0, y0, total_w, total_h);
        let frame = Rect::new(x0, y0, frame_w, frame_h);
        let half = frame_w / 2;

        Self {
            rows,
            cols,
            tile_w,
            tile_h,
            screen,
            frame,
            board: Rect::new(x0 + 1, y0 + 1, board_w, board_h),
            panel: Rect::new(frame.right() + PANEL_GAP, y0, PANEL_W, total_h),
            rules_button: Rect::new(x0, frame.bottom(), half.saturating_sub(1), BUTTON_H),
            new_game_button: Rect::new(
                x0 + half + 1,
                frame.bottom(),
                frame_w.saturating_sub(half + 1),
                BUTTON_H,
            ),
            back_button: Rect::new(
                screen.right().saturating_sub(12),
                screen.bottom().saturating_sub(BUTTON_H),
                10,
                BUTTON_H,
            ),
            rules: Rect::new(0, y0, viewport.width, total_h),
        }
    }

    /// Top-left cell of tile `(row, col)`
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.board.x + col as u16 * self.tile_w,
            self.board.y + row as u16 * self.tile_h,
        )
    }

    /// Tile under terminal cell `(x, y)`, if any
    pub fn tile_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        if !self.board.contains(x, y) {
            return None;
        }
        let col = ((x - self.board.x) / self.tile_w) as usize;
        let row = ((y - self.board.y) / self.tile_h) as usize;
        Some((row, col))
    }

    /// Resolve a pointer position to the region under it
    pub fn hit_test(&self, x: u16, y: u16, screen: Screen) -> Option<Region> {
        match screen {
            Screen::Rules => self
                .back_button
                .contains(x, y)
                .then_some(Region::BackButton),
            Screen::Board => {
                if let Some((row, col)) = self.tile_at(x, y) {
                    Some(Region::Tile { row, col })
                } else if self.rules_button.contains(x, y) {
                    Some(Region::RulesButton)
                } else if self.new_game_button.contains(x, y) {
                    Some(Region::NewGameButton)
                } else {
                    None
                }
            }
        }
    }
}
