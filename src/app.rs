//! Front-end glue between the terminal and a [`Match`].
//!
//! `App` owns the match plus the presentation state the match does not care
//! about (which screen is showing, where things were last drawn) and turns
//! input events into match operations.

use std::time::Instant;

use log::debug;

use crate::core::{Match, MatchSnapshot};
use crate::input::dispatch;
use crate::term::{FrameBuffer, GameView, Layout, Screen, Viewport};
use crate::types::{Command, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    game: Match,
    view: GameView,
    screen: Screen,
    /// Layout of the last rendered frame; clicks are resolved against it
    layout: Option<Layout>,
    snapshot: MatchSnapshot,
}

impl App {
    pub fn new(game: Match) -> Self {
        let view = GameView::for_config(game.config());
        Self {
            game,
            view,
            screen: Screen::Board,
            layout: None,
            snapshot: MatchSnapshot::default(),
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Draw the current state and remember the layout for hit-testing.
    pub fn render_into(&mut self, viewport: Viewport, now: Instant, fb: &mut FrameBuffer) {
        self.game.snapshot_into(now, &mut self.snapshot);
        let layout = self.view.render_into(&self.snapshot, self.screen, viewport, fb);
        self.layout = Some(layout);
    }

    pub fn tick(&mut self, now: Instant) {
        self.game.tick(now);
    }

    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> Flow {
        match event {
            InputEvent::QuitRequested => Flow::Quit,
            InputEvent::PointerDown { x, y, button } => {
                // Only the switch notice is drawn during the pause; nothing
                // under the pointer is clickable.
                if self.screen == Screen::Board && self.game.pause_remaining(now).is_some() {
                    return Flow::Continue;
                }
                let command = self
                    .layout
                    .and_then(|layout| layout.hit_test(x, y, self.screen))
                    .and_then(|region| dispatch(region, button));
                match command {
                    Some(command) => self.handle_command(command, now),
                    None => Flow::Continue,
                }
            }
        }
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::NewGame => {
                self.screen = Screen::Board;
                self.game.new_game();
            }
            Command::ShowRules => {
                // Only New Game reacts once the match is over, and nothing
                // reacts while the turn-switch notice is up.
                if self.game.is_over() || self.game.pause_remaining(now).is_some() {
                    return Flow::Continue;
                }
                debug!("rules opened");
                self.screen = Screen::Rules;
            }
            Command::HideRules => {
                // Leaving the rules starts a fresh game.
                if self.screen == Screen::Rules {
                    self.screen = Screen::Board;
                    self.game.new_game();
                }
            }
            Command::Reveal { .. } | Command::ToggleFlag { .. } => {
                if self.screen == Screen::Board {
                    self.game.apply(command, now);
                }
            }
        }
        Flow::Continue
    }
}
