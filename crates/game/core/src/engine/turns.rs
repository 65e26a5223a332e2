use super::{BattleEvent, BattleSession, InputOutcome, Outcome, Phase, SessionError};
use crate::state::PlayerId;

/// Turn cycling and win evaluation for BattleSession.
impl BattleSession {
    /// Ends the active player's turn.
    ///
    /// Every live unit on *both* sides gets its action flags cleared, the
    /// active player flips, and any selection is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] once the match has ended.
    pub fn end_turn(&mut self) -> Result<InputOutcome, SessionError> {
        self.ensure_running()?;

        let mut events = Vec::new();
        for unit in &mut self.units {
            unit.reset_turn_flags();
        }
        self.active_player = self.active_player.other();
        self.clear_selection(&mut events);

        tracing::info!(active_player = %self.active_player, "turn ended");
        events.push(BattleEvent::TurnEnded {
            new_active_player: self.active_player,
        });

        Ok(InputOutcome::new(self.phase, events))
    }

    /// Checks whether a side has been wiped out after a removal.
    ///
    /// The other side wins when one side has no units left; if both are empty
    /// the match is a draw. Either way the session becomes terminal.
    pub(super) fn evaluate_victory(&mut self, events: &mut Vec<BattleEvent>) {
        let one_left = self.live_count(PlayerId::One);
        let two_left = self.live_count(PlayerId::Two);

        let outcome = match (one_left, two_left) {
            (0, 0) => Outcome::Draw,
            (0, _) => Outcome::Winner(PlayerId::Two),
            (_, 0) => Outcome::Winner(PlayerId::One),
            _ => return,
        };

        tracing::info!(%outcome, "game over");
        self.phase = Phase::GameOver(outcome);
        events.push(BattleEvent::GameOver { outcome });
    }
}
