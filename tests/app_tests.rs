use std::time::{Duration, Instant};

use duel_sweeper::app::{App, Flow};
use duel_sweeper::core::{Board, Match};
use duel_sweeper::term::{FrameBuffer, Screen, Viewport};
use duel_sweeper::types::{GameConfig, InputEvent, Player, PointerButton};

fn rendered_app(now: Instant) -> (App, FrameBuffer) {
    let board = Board::from_mines(4, 4, &[(0, 0)]).unwrap();
    let game = Match::with_board(GameConfig::default(), board, 9).unwrap();
    let mut app = App::new(game);
    let mut fb = FrameBuffer::new(0, 0);
    app.render_into(Viewport::new(38, 9), now, &mut fb);
    (app, fb)
}

fn press(x: u16, y: u16, button: PointerButton) -> InputEvent {
    InputEvent::PointerDown { x, y, button }
}

#[test]
fn left_click_on_tile_reveals_it() {
    let now = Instant::now();
    let (mut app, _) = rendered_app(now);

    // Tile (1, 1) sits at cells (3..5, 2).
    assert_eq!(app.handle_input(press(4, 2, PointerButton::Left), now), Flow::Continue);
    assert!(app.game().board()[(1, 1)].is_revealed());
    assert_eq!(app.game().scores(), [1, 0]);
}

#[test]
fn right_click_on_tile_flags_it() {
    let now = Instant::now();
    let (mut app, _) = rendered_app(now);

    app.handle_input(press(1, 1, PointerButton::Right), now);
    assert!(app.game().board()[(0, 0)].is_flagged());
}

#[test]
fn clicks_outside_the_board_do_nothing() {
    let now = Instant::now();
    let (mut app, _) = rendered_app(now);

    app.handle_input(press(0, 0, PointerButton::Left), now);
    app.handle_input(press(20, 3, PointerButton::Left), now);
    assert_eq!(app.game().board().revealed_count(), 0);
    assert_eq!(app.game().turn_started_at(), None);
}

#[test]
fn buttons_drive_screens_and_new_game() {
    let now = Instant::now();
    let (mut app, mut fb) = rendered_app(now);

    // Right clicks on buttons are ignored.
    app.handle_input(press(1, 7, PointerButton::Right), now);
    assert_eq!(app.screen(), Screen::Board);

    app.handle_input(press(1, 7, PointerButton::Left), now);
    assert_eq!(app.screen(), Screen::Rules);

    app.render_into(Viewport::new(38, 9), now, &mut fb);
    let back = app.layout().unwrap().back_button;
    app.handle_input(press(back.x, back.y, PointerButton::Left), now);
    assert_eq!(app.screen(), Screen::Board);
    assert_eq!(app.game().episode_id(), 1);

    app.render_into(Viewport::new(38, 9), now, &mut fb);
    app.handle_input(press(7, 7, PointerButton::Left), now);
    assert_eq!(app.game().episode_id(), 2);
}

#[test]
fn ticks_switch_players() {
    let now = Instant::now();
    let (mut app, _) = rendered_app(now);

    app.handle_input(press(4, 2, PointerButton::Left), now);
    app.tick(now + Duration::from_secs(10));
    assert_eq!(app.game().current_player(), Player::Two);

    // Board clicks land on the pause and are dropped.
    app.handle_input(press(6, 3, PointerButton::Left), now + Duration::from_secs(11));
    assert_eq!(app.game().scores(), [1, 0]);

    assert_eq!(
        app.handle_input(InputEvent::QuitRequested, now + Duration::from_secs(11)),
        Flow::Quit
    );
}

#[test]
fn hidden_buttons_ignore_clicks_during_switch_notice() {
    let now = Instant::now();
    let (mut app, mut fb) = rendered_app(now);

    app.handle_input(press(4, 2, PointerButton::Left), now);
    app.tick(now + Duration::from_secs(10));
    let during = now + Duration::from_secs(11);
    app.render_into(Viewport::new(38, 9), during, &mut fb);
    assert!(!fb.to_text().contains("New Game"));

    // Where the New Game and Rules buttons sit when the board is shown.
    app.handle_input(press(7, 7, PointerButton::Left), during);
    app.handle_input(press(1, 7, PointerButton::Left), during);

    assert_eq!(app.game().episode_id(), 0);
    assert_eq!(app.screen(), Screen::Board);
    assert_eq!(app.game().scores(), [1, 0]);
    assert!(app.game().pause_remaining(during).is_some());
}
