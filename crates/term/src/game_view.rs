//! GameView: maps a `MatchSnapshot` onto a [`Canvas`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{Canvas, FrameCanvas, TextStyle};
use crate::core::{MatchSnapshot, PhaseView};
use crate::fb::{FrameBuffer, Rect, Rgb};
use crate::layout::{Layout, Screen, Viewport, PANEL_W};
use crate::types::{EndCause, GameConfig, Player};

const BUTTON_GRAY: Rgb = Rgb::new(100, 100, 100);

pub fn player_color(player: Player) -> Rgb {
    match player {
        Player::One => Rgb::new(0, 0, 255),
        Player::Two => Rgb::new(0, 160, 0),
    }
}

/// The rules screen text for a given turn length
pub fn rules_lines(turn_seconds: u64) -> Vec<String> {
    vec![
        "Rules:".to_string(),
        "1. The game follows the rules of minesweeper, with some additions!".to_string(),
        format!("2. Player 1 starts the game and plays for {turn_seconds} seconds."),
        format!("3. After that ends, it's Player 2's turn for {turn_seconds} seconds."),
        "4. This cycle of switching turns repeats.".to_string(),
        "5. The timer only starts for your turn when you first click/flag a block!".to_string(),
        "6. Each player earns 1 point for each block that gets revealed (flags do not count)."
            .to_string(),
        "7. Avoid clicking on bombs, or you lose!".to_string(),
        "8. If all blocks are cleared, the player with more points wins (player 2 wins tiebreakers)!"
            .to_string(),
        "9. Clearing the very last block gives some bonus points!".to_string(),
        "10. Click New Game to start a new game.".to_string(),
    ]
}

/// Terminal renderer for a match.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            tile_w: 2,
            tile_h: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Size tiles from the configured pixel size, taking a terminal cell as
    /// roughly 16x32 px.
    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(config.tile_px / 16, config.tile_px / 32)
    }

    pub fn layout(&self, snap: &MatchSnapshot, viewport: Viewport) -> Layout {
        Layout::new(snap.rows, snap.cols, self.tile_w, self.tile_h, viewport)
    }

    /// Render into an existing framebuffer and return the layout used, so the
    /// caller can hit-test clicks against exactly what is on screen.
    pub fn render_into(
        &self,
        snap: &MatchSnapshot,
        screen: Screen,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Layout {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = self.layout(snap, viewport);
        let mut canvas = FrameCanvas::new(fb, self.tile_w, self.tile_h);
        self.draw(snap, screen, &layout, &mut canvas);
        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &MatchSnapshot, screen: Screen, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, screen, viewport, &mut fb);
        fb
    }

    /// Draw a frame through the canvas contract.
    pub fn draw<C: Canvas>(&self, snap: &MatchSnapshot, screen: Screen, layout: &Layout, canvas: &mut C) {
        if screen == Screen::Rules {
            self.draw_rules(snap, layout, canvas);
            return;
        }
        if snap.phase == PhaseView::SwitchingPlayers {
            self.draw_switch_notice(snap, layout, canvas);
            return;
        }

        self.draw_border(layout.frame, canvas);
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let (x, y) = layout.tile_origin(row, col);
                canvas.draw_tile(snap.tile(row, col), x, y);
            }
        }

        canvas.draw_button("Rules", layout.rules_button, BUTTON_GRAY);
        canvas.draw_button("New Game", layout.new_game_button, BUTTON_GRAY);
        self.draw_side_panel(snap, layout, canvas);
    }

    fn draw_border<C: Canvas>(&self, frame: Rect, canvas: &mut C) {
        if frame.w < 2 || frame.h < 2 {
            return;
        }
        let inner = "─".repeat((frame.w - 2) as usize);
        canvas.draw_text(&format!("┌{inner}┐"), frame.x, frame.y, TextStyle::Muted);
        canvas.draw_text(&format!("└{inner}┘"), frame.x, frame.bottom() - 1, TextStyle::Muted);
        for y in frame.y + 1..frame.bottom() - 1 {
            canvas.draw_text("│", frame.x, y, TextStyle::Muted);
            canvas.draw_text("│", frame.right() - 1, y, TextStyle::Muted);
        }
    }

    fn draw_side_panel<C: Canvas>(&self, snap: &MatchSnapshot, layout: &Layout, canvas: &mut C) {
        let panel = layout.panel;
        let x = panel.x + 1;

        let banner = Rect::new(panel.x, panel.y, PANEL_W, 3);
        match snap.winner {
            Some(winner) => canvas.draw_button(
                &format!("Player {} WINS!!", winner.number()),
                banner,
                player_color(winner),
            ),
            None => canvas.draw_button(
                &format!("Player {} Turn", snap.current_player.number()),
                banner,
                player_color(snap.current_player),
            ),
        }

        canvas.draw_text(
            &format!("Timer: {}", snap.remaining_seconds),
            x,
            panel.y + 4,
            TextStyle::Timer,
        );

        canvas.draw_text(
            &format!("Player 1 Score: {}", snap.scores[0]),
            x,
            panel.y + 6,
            TextStyle::Body,
        );
        canvas.draw_text(
            &format!("Player 2 Score: {}", snap.scores[1]),
            x,
            panel.y + 7,
            TextStyle::Body,
        );

        match snap.cause {
            Some(EndCause::MineTriggered) => {
                canvas.draw_text("A mine went off!", x, panel.y + 9, TextStyle::Title)
            }
            Some(EndCause::BoardCleared) => {
                canvas.draw_text("Board cleared!", x, panel.y + 9, TextStyle::Title)
            }
            None if snap.phase == PhaseView::AwaitingFirstMove => {
                canvas.draw_text("Click to start the clock", x, panel.y + 9, TextStyle::Muted)
            }
            None => {}
        }

        canvas.draw_text(
            &format!("Game #{}", snap.episode_id + 1),
            x,
            panel.y + 11,
            TextStyle::Muted,
        );
        canvas.draw_text(&format!("Seed: {}", snap.seed), x, panel.y + 12, TextStyle::Muted);

        canvas.draw_text(
            "[n]ew [r]ules [q]uit",
            x,
            panel.bottom().saturating_sub(1),
            TextStyle::Muted,
        );
    }

    fn draw_switch_notice<C: Canvas>(&self, snap: &MatchSnapshot, layout: &Layout, canvas: &mut C) {
        let message = format!("STOP! It's now Player {}'s turn", snap.current_player.number());
        let len = message.chars().count() as u16;
        let screen = layout.screen;
        let x = screen.x + screen.w.saturating_sub(len) / 2;
        let y = screen.y + screen.h / 2;
        canvas.draw_text(&message, x, y, TextStyle::Alert);
    }

    fn draw_rules<C: Canvas>(&self, snap: &MatchSnapshot, layout: &Layout, canvas: &mut C) {
        let area = layout.rules;
        let width = area.w.saturating_sub(2) as usize;
        let mut y = area.y + 1;
        for (i, line) in rules_lines(snap.turn_seconds).iter().enumerate() {
            let style = if i == 0 { TextStyle::Title } else { TextStyle::Body };
            for part in wrap_words(line, width) {
                canvas.draw_text(&part, area.x + 1, y, style);
                y += 1;
            }
        }
        canvas.draw_button("Back", layout.back_button, BUTTON_GRAY);
    }
}

/// Greedy word wrap to `width` columns. A word longer than a line gets a
/// line of its own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if len > 0 && len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            len = 0;
        }
        if len > 0 {
            line.push(' ');
            len += 1;
        }
        line.push_str(word);
        len += word_len;
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileVisual;

    /// Records calls instead of drawing
    #[derive(Default)]
    struct Recorder {
        tiles: Vec<(TileVisual, u16, u16)>,
        texts: Vec<String>,
        buttons: Vec<String>,
    }

    impl Canvas for Recorder {
        fn draw_tile(&mut self, visual: TileVisual, x: u16, y: u16) {
            self.tiles.push((visual, x, y));
        }

        fn draw_text(&mut self, content: &str, _x: u16, _y: u16, _style: TextStyle) {
            self.texts.push(content.to_string());
        }

        fn draw_button(&mut self, label: &str, _rect: Rect, _color: Rgb) {
            self.buttons.push(label.to_string());
        }
    }

    fn snap_2x2() -> MatchSnapshot {
        MatchSnapshot {
            rows: 2,
            cols: 2,
            tiles: vec![
                TileVisual::Unknown,
                TileVisual::Flagged,
                TileVisual::Hint(1),
                TileVisual::Empty,
            ],
            remaining_seconds: 7,
            turn_seconds: 10,
            ..MatchSnapshot::default()
        }
    }

    #[test]
    fn draws_every_tile_once() {
        let snap = snap_2x2();
        let view = GameView::default();
        let layout = view.layout(&snap, Viewport::new(80, 24));
        let mut rec = Recorder::default();
        view.draw(&snap, Screen::Board, &layout, &mut rec);

        assert_eq!(rec.tiles.len(), 4);
        assert_eq!(rec.tiles[1].0, TileVisual::Flagged);
        let (x0, y0) = layout.tile_origin(0, 0);
        assert_eq!(rec.tiles[3], (TileVisual::Empty, x0 + 2, y0 + 1));
        assert!(rec.buttons.contains(&"New Game".to_string()));
        assert!(rec.buttons.contains(&"Player 1 Turn".to_string()));
        assert!(rec.texts.contains(&"Timer: 7".to_string()));
    }

    #[test]
    fn winner_banner_replaces_turn_banner() {
        let mut snap = snap_2x2();
        snap.phase = PhaseView::GameOver;
        snap.winner = Some(Player::Two);
        snap.cause = Some(EndCause::MineTriggered);

        let view = GameView::default();
        let layout = view.layout(&snap, Viewport::new(80, 24));
        let mut rec = Recorder::default();
        view.draw(&snap, Screen::Board, &layout, &mut rec);

        assert!(rec.buttons.contains(&"Player 2 WINS!!".to_string()));
        assert!(!rec.buttons.iter().any(|b| b.ends_with("Turn")));
    }

    #[test]
    fn switch_notice_hides_board() {
        let mut snap = snap_2x2();
        snap.phase = PhaseView::SwitchingPlayers;
        snap.current_player = Player::Two;

        let view = GameView::default();
        let layout = view.layout(&snap, Viewport::new(80, 24));
        let mut rec = Recorder::default();
        view.draw(&snap, Screen::Board, &layout, &mut rec);

        assert!(rec.tiles.is_empty());
        assert_eq!(rec.texts, vec!["STOP! It's now Player 2's turn".to_string()]);
    }

    #[test]
    fn side_panel_shows_game_number_and_seed() {
        let mut snap = snap_2x2();
        snap.episode_id = 2;
        snap.seed = 42;

        let view = GameView::default();
        let layout = view.layout(&snap, Viewport::new(80, 24));
        let mut rec = Recorder::default();
        view.draw(&snap, Screen::Board, &layout, &mut rec);

        assert!(rec.texts.contains(&"Game #3".to_string()));
        assert!(rec.texts.contains(&"Seed: 42".to_string()));
    }

    #[test]
    fn rules_wrap_to_viewport_width() {
        let snap = snap_2x2();
        let view = GameView::default();
        let layout = view.layout(&snap, Viewport::new(80, 24));
        let mut rec = Recorder::default();
        view.draw(&snap, Screen::Rules, &layout, &mut rec);

        assert!(rec.texts.iter().all(|t| t.chars().count() <= 78));
        assert!(rec.texts.contains(&"tiebreakers)!".to_string()));
        assert_eq!(rec.buttons, vec!["Back".to_string()]);
    }

    #[test]
    fn wrap_words_breaks_on_spaces() {
        assert_eq!(wrap_words("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap_words("abcdefgh x", 4), vec!["abcdefgh", "x"]);
        assert_eq!(wrap_words("", 4), vec![""]);
    }

    #[test]
    fn rules_use_turn_length() {
        let lines = rules_lines(10);
        assert_eq!(lines.len(), 11);
        assert!(lines[2].contains("plays for 10 seconds"));
    }

    #[test]
    fn tile_size_from_config() {
        let view = GameView::for_config(&GameConfig::default());
        assert_eq!((view.tile_w, view.tile_h), (2, 1));

        let big = GameConfig {
            tile_px: 64,
            ..GameConfig::default()
        };
        let view = GameView::for_config(&big);
        assert_eq!((view.tile_w, view.tile_h), (4, 2));
    }
}
