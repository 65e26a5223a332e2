//! Presentation layer for the terminal client.
//!
//! Rendering is read-only: it queries the session and never changes it.

mod board;
mod messages;

pub use board::{render_board, render_roster};
pub use messages::describe_event;

use std::fmt::Write;

use skirmish_core::{BattleSession, Phase, PlayerId};

/// Status line shown under the board.
///
/// While a unit is selected the line also names it and says what it may
/// still do.
pub fn status_line(session: &BattleSession) -> String {
    let phase = session.phase();
    if let Phase::GameOver(outcome) = phase {
        return format!("{outcome}. type `reset` to play again");
    }

    let mut line = format!("{} to act [{}] units:", session.active_player(), phase.as_str());
    for (i, player) in PlayerId::ALL.into_iter().enumerate() {
        let sep = if i == 0 { " " } else { " vs " };
        let _ = write!(line, "{sep}{}", session.live_count(player));
    }

    if let Some(unit) = session.selected_unit().filter(|_| phase.has_selection()) {
        let _ = write!(
            line,
            " | selected {} {} at {}: {} moves, {} targets",
            unit.archetype().display_name,
            unit.id(),
            unit.position(),
            session.legal_moves().len(),
            session.legal_attacks().len(),
        );
    }
    line
}

#[cfg(test)]
mod tests {
    use skirmish_core::Position;

    use super::*;

    #[test]
    fn idle_status_has_no_selection() {
        let session = BattleSession::with_defaults().unwrap();
        assert_eq!(status_line(&session), "player 1 to act [idle] units: 5 vs 5");
    }

    #[test]
    fn selected_unit_is_named_in_status() {
        let mut session = BattleSession::with_defaults().unwrap();
        session.submit_input(Position::new(0, 0)).unwrap();

        let line = status_line(&session);
        assert!(line.starts_with("player 1 to act [unit_selected] units: 5 vs 5"));
        assert!(line.contains("| selected Warrior #0 at (0, 0): "));
        assert!(line.ends_with(&format!(
            "{} moves, {} targets",
            session.legal_moves().len(),
            session.legal_attacks().len()
        )));

        // Cancelling drops the selection suffix again.
        session.submit_input(Position::new(9, 4)).unwrap();
        assert!(!status_line(&session).contains("selected"));
    }
}
