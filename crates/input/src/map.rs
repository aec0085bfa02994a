//! Mapping from terminal events to game input.

use crate::types::{Command, InputEvent, PointerButton};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A terminal event after mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped {
    /// Pointer or quit, still to be resolved against the layout
    Input(InputEvent),
    /// Keyboard shortcut, applied directly
    Command(Command),
}

/// Map a mouse press to a pointer event. Moves, drags, releases and the
/// middle button are ignored.
pub fn map_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    let button = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerButton::Left,
        MouseEventKind::Down(MouseButton::Right) => PointerButton::Right,
        _ => return None,
    };
    Some(InputEvent::PointerDown {
        x: mouse.column,
        y: mouse.row,
        button,
    })
}

/// Keyboard shortcuts for the on-screen buttons.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::ShowRules),
        KeyCode::Esc | KeyCode::Backspace => Some(Command::HideRules),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map any terminal event; quit keys become `QuitRequested`.
pub fn map_event(event: Event) -> Option<Mapped> {
    match event {
        Event::Mouse(mouse) => map_mouse_event(mouse).map(Mapped::Input),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                Some(Mapped::Input(InputEvent::QuitRequested))
            } else {
                handle_key_event(key).map(Mapped::Command)
            }
        }
        _ => None,
    }
}
