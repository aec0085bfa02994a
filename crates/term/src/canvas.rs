//! Drawing contract between the game view and a concrete surface.
//!
//! The view only ever asks for three things: a tile, a piece of text and a
//! button. [`FrameCanvas`] implements them on top of a [`FrameBuffer`].

use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb, BG};
use crate::types::TileVisual;

/// Text role, mapped to a concrete style by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Body,
    /// Turn countdown
    Timer,
    /// Turn-switch notice
    Alert,
    Muted,
}

pub trait Canvas {
    /// Draw one tile with its top-left corner at `(x, y)`.
    fn draw_tile(&mut self, visual: TileVisual, x: u16, y: u16);

    fn draw_text(&mut self, content: &str, x: u16, y: u16, style: TextStyle);

    /// Filled rectangle with a centred label.
    fn draw_button(&mut self, label: &str, rect: Rect, color: Rgb);
}

/// [`Canvas`] over a framebuffer, with tiles `tile_w` x `tile_h` cells big.
pub struct FrameCanvas<'a> {
    fb: &'a mut FrameBuffer,
    tile_w: u16,
    tile_h: u16,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, tile_w: u16, tile_h: u16) -> Self {
        Self { fb, tile_w, tile_h }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn draw_tile(&mut self, visual: TileVisual, x: u16, y: u16) {
        let (ch, style) = tile_glyph(visual);
        self.fb
            .fill_rect(Rect::new(x, y, self.tile_w, self.tile_h), ' ', style);
        self.fb.put_char(x, y, ch, style);
    }

    fn draw_text(&mut self, content: &str, x: u16, y: u16, style: TextStyle) {
        self.fb.put_str(x, y, content, text_style(style));
    }

    fn draw_button(&mut self, label: &str, rect: Rect, color: Rgb) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), color).bold();
        self.fb.fill_rect(rect, ' ', style);
        self.fb.put_str_centered(rect, label, style);
    }
}

fn text_style(style: TextStyle) -> CellStyle {
    match style {
        TextStyle::Title => CellStyle::default().bold(),
        TextStyle::Body => CellStyle::default(),
        TextStyle::Timer => CellStyle::new(Rgb::new(255, 0, 0), BG).bold(),
        TextStyle::Alert => CellStyle::new(Rgb::new(255, 0, 0), BG).bold(),
        TextStyle::Muted => CellStyle::new(Rgb::new(140, 140, 140), BG),
    }
}

const COVERED_BG: Rgb = Rgb::new(110, 110, 120);
const OPEN_BG: Rgb = Rgb::new(60, 60, 65);

fn tile_glyph(visual: TileVisual) -> (char, CellStyle) {
    match visual {
        TileVisual::Unknown => ('▒', CellStyle::new(Rgb::new(150, 150, 160), COVERED_BG)),
        TileVisual::Flagged => ('⚑', CellStyle::new(Rgb::new(230, 40, 40), COVERED_BG).bold()),
        TileVisual::Mine => ('*', CellStyle::new(Rgb::new(0, 0, 0), OPEN_BG).bold()),
        TileVisual::ExplodedMine => ('*', CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(220, 30, 30)).bold()),
        TileVisual::WronglyFlagged => ('✗', CellStyle::new(Rgb::new(230, 40, 40), OPEN_BG).bold()),
        TileVisual::Empty => (' ', CellStyle::new(OPEN_BG, OPEN_BG)),
        TileVisual::Hint(n) => (hint_digit(n), CellStyle::new(hint_color(n), OPEN_BG).bold()),
    }
}

fn hint_digit(n: u8) -> char {
    char::from_digit(n as u32, 10).unwrap_or('?')
}

/// Classic per-count colours
fn hint_color(n: u8) -> Rgb {
    match n {
        1 => Rgb::new(80, 140, 255),
        2 => Rgb::new(60, 180, 60),
        3 => Rgb::new(230, 60, 60),
        4 => Rgb::new(140, 80, 220),
        5 => Rgb::new(180, 60, 40),
        6 => Rgb::new(40, 180, 180),
        7 => Rgb::new(20, 20, 20),
        _ => Rgb::new(160, 160, 160),
    }
}
