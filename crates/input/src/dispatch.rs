//! Dispatch table from clicked screen regions to commands.

use crate::types::{Command, PointerButton, Region};

/// Resolve a click on `region` with `button`.
///
/// Tiles take both buttons; the on-screen buttons only react to a left click.
pub fn dispatch(region: Region, button: PointerButton) -> Option<Command> {
    match (region, button) {
        (Region::Tile { row, col }, PointerButton::Left) => Some(Command::Reveal { row, col }),
        (Region::Tile { row, col }, PointerButton::Right) => Some(Command::ToggleFlag { row, col }),
        (Region::NewGameButton, PointerButton::Left) => Some(Command::NewGame),
        (Region::RulesButton, PointerButton::Left) => Some(Command::ShowRules),
        (Region::BackButton, PointerButton::Left) => Some(Command::HideRules),
        _ => None,
    }
}
