use std::time::{Duration, Instant};

use duel_sweeper::core::{Board, Match};
use duel_sweeper::term::{GameView, Screen, Viewport};
use duel_sweeper::types::{GameConfig, PointerButton};

fn corner_match() -> Match {
    let board = Board::from_mines(4, 4, &[(0, 0)]).unwrap();
    Match::with_board(GameConfig::default(), board, 1).unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = corner_match().snapshot(Instant::now());
    let view = GameView::default();

    // 4x4 tiles at 2x1 cells => 8x4 board, 10x6 with the border.
    let fb = view.render(&snap, Screen::Board, Viewport::new(38, 9));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(9, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(9, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_tiles_two_chars_wide() {
    let mut game = corner_match();
    let now = Instant::now();
    game.click(1, 1, PointerButton::Left, now);
    game.click(0, 0, PointerButton::Right, now);
    let snap = game.snapshot(now);

    let fb = GameView::default().render(&snap, Screen::Board, Viewport::new(38, 9));

    // Tile (r, c) starts at (1 + 2c, 1 + r).
    assert_eq!(fb.get(1, 1).unwrap().ch, '⚑');
    assert_eq!(fb.get(3, 2).unwrap().ch, '1');
    assert_eq!(fb.get(4, 2).unwrap().ch, ' ');
    assert_eq!(fb.get(5, 2).unwrap().ch, '▒');
}

#[test]
fn term_view_side_panel_shows_turn_and_scores() {
    let mut game = corner_match();
    let now = Instant::now();
    game.click(1, 1, PointerButton::Left, now);
    let snap = game.snapshot(now + Duration::from_secs(4));

    let text = GameView::default()
        .render(&snap, Screen::Board, Viewport::new(38, 9))
        .to_text();

    assert!(text.contains("Player 1 Turn"));
    assert!(text.contains("Timer: 6"));
    assert!(text.contains("Player 1 Score: 1"));
    assert!(text.contains("Player 2 Score: 0"));
    assert!(text.contains("Rules"));
    assert!(text.contains("New Game"));
}

#[test]
fn term_view_announces_winner() {
    let mut game = corner_match();
    let now = Instant::now();
    game.click(0, 0, PointerButton::Left, now);
    let snap = game.snapshot(now);

    let text = GameView::default()
        .render(&snap, Screen::Board, Viewport::new(38, 9))
        .to_text();
    assert!(text.contains("Player 2 WINS!!"));
}

#[test]
fn term_view_switch_notice_hides_the_board() {
    let mut game = corner_match();
    let now = Instant::now();
    game.click(1, 1, PointerButton::Left, now);
    game.tick(now + Duration::from_secs(10));
    let snap = game.snapshot(now + Duration::from_secs(11));

    let fb = GameView::default().render(&snap, Screen::Board, Viewport::new(38, 9));
    let text = fb.to_text();

    assert!(text.contains("STOP! It's now Player 2's turn"));
    assert_ne!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_rules_screen_lists_rules() {
    let snap = corner_match().snapshot(Instant::now());
    let text = GameView::default()
        .render(&snap, Screen::Rules, Viewport::new(100, 20))
        .to_text();

    assert!(text.contains("Rules:"));
    assert!(text.contains("plays for 10 seconds"));
    assert!(text.contains("player 2 wins tiebreakers"));
    assert!(text.contains("Back"));
}
