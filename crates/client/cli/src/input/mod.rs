//! Input processing for the CLI client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application stays agnostic about the concrete command syntax.

use skirmish_core::Position;

/// High-level outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Exit the application.
    Quit,
    /// Feed a grid coordinate to the session.
    Tile(Position),
    /// End the active player's turn.
    EndTurn,
    /// Start the battle over with the same setup.
    Restart,
    /// Redraw the board.
    Show,
    Help,
    /// Blank line.
    None,
    /// Anything that could not be parsed.
    Unknown(String),
}

/// Parses a line such as `3 4`, `3,4`, `end` or `quit`.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::None;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Command::Quit,
        "e" | "end" => return Command::EndTurn,
        "r" | "reset" | "restart" => return Command::Restart,
        "s" | "show" => return Command::Show,
        "h" | "help" | "?" => return Command::Help,
        _ => {}
    }

    parse_position(trimmed)
        .map(Command::Tile)
        .unwrap_or_else(|| Command::Unknown(trimmed.to_string()))
}

fn parse_position(text: &str) -> Option<Position> {
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(x, y))
}

pub const HELP: &str = "\
commands:
  <x> <y>   select a unit, move the selection, or attack (also x,y)
  end       end the current turn
  reset     restart the battle
  show      redraw the board
  quit      leave the game";
