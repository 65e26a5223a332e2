//! Text rendering of the battlefield.
//!
//! Each tile is three characters wide. Units show the first letter of their
//! archetype name, upper case for player 1 and lower case for player 2.
//! The selected unit is bracketed, legal moves show `*` and attackable
//! enemies are prefixed with `x`.

use std::fmt::Write;

use skirmish_core::{BattleSession, PlayerId, Position, Unit};

pub fn render_board(session: &BattleSession) -> String {
    let grid = session.grid();
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..grid.width() {
        let _ = write!(out, "{:^3}", x);
    }
    out.push('\n');

    for y in 0..grid.height() as i32 {
        let _ = write!(out, "{:>2} ", y);
        for x in 0..grid.width() as i32 {
            out.push_str(&render_tile(session, Position::new(x, y)));
        }
        out.push('\n');
    }
    out
}

fn render_tile(session: &BattleSession, position: Position) -> String {
    match session.unit_at(position) {
        Some(unit) => {
            let glyph = glyph(unit);
            if session.selection() == Some(unit.id()) {
                format!("[{glyph}]")
            } else if session.legal_attacks().contains(&position) {
                format!("x{glyph} ")
            } else {
                format!(" {glyph} ")
            }
        }
        None if session.legal_moves().contains(&position) => " * ".to_string(),
        None => " . ".to_string(),
    }
}

fn glyph(unit: &Unit) -> char {
    let letter = unit
        .archetype()
        .display_name
        .chars()
        .next()
        .unwrap_or('?');
    match unit.owner() {
        PlayerId::One => letter.to_ascii_uppercase(),
        PlayerId::Two => letter.to_ascii_lowercase(),
    }
}

/// One line per live unit: id, owner, name, position, hp and spent actions.
pub fn render_roster(session: &BattleSession) -> String {
    let mut out = String::new();
    for unit in session.units() {
        let _ = writeln!(
            out,
            "{} {} {:<8} at {} hp {}/{}{}{}",
            unit.id(),
            unit.owner(),
            unit.archetype().display_name,
            unit.position(),
            unit.current_hp(),
            unit.max_hp(),
            if unit.has_moved() { " moved" } else { "" },
            if unit.has_attacked() { " attacked" } else { "" },
        );
    }
    out
}
