//! Terminal Duel Sweeper runner (default binary).
//!
//! Uses crossterm for mouse/keyboard input and the framebuffer renderer from
//! `duel_sweeper::term`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use duel_sweeper::app::{App, Flow};
use duel_sweeper::config::{init_logging, RunOptions};
use duel_sweeper::core::Match;
use duel_sweeper::input::{map_event, Mapped};
use duel_sweeper::term::{FrameBuffer, TerminalRenderer, Viewport};
use duel_sweeper::types::{GameConfig, TICK_MS};

fn main() -> Result<()> {
    let options = RunOptions::from_env();
    init_logging(&options)?;

    let game = Match::new(GameConfig::default(), options.seed)
        .context("invalid game configuration")?;
    let mut app = App::new(game);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), Instant::now(), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let flow = match event::read()? {
                Event::Resize(..) => {
                    term.invalidate();
                    Flow::Continue
                }
                other => match map_event(other) {
                    Some(Mapped::Input(input)) => app.handle_input(input, Instant::now()),
                    Some(Mapped::Command(command)) => app.handle_command(command, Instant::now()),
                    None => Flow::Continue,
                },
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(last_tick);
        }
    }
}
