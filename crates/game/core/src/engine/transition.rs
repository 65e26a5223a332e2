//! Selection state machine.
//!
//! ```text
//! Idle ──friendly unit──▶ UnitSelected ──legal move──▶ PendingAttack
//!   ▲                         │  │                          │
//!   │                         │  └──legal attack──┐         │ legal attack
//!   └──── anything else ◀─────┘                   ▼         ▼
//!                                               Idle (or GameOver)
//! ```
//!
//! Clicking another friendly unit re-selects from either selected phase.
//! Input that matches nothing cancels the selection. None of these paths
//! report errors.

use super::{BattleEvent, BattleSession, InputOutcome, Phase, SessionError, range};
use crate::state::{Position, UnitId};

impl BattleSession {
    /// Interprets a grid coordinate relative to the current selection.
    ///
    /// Out-of-bounds coordinates are ignored without touching the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] once the match has ended.
    pub fn submit_input(&mut self, position: Position) -> Result<InputOutcome, SessionError> {
        self.ensure_running()?;

        let mut events = Vec::new();
        if !self.grid.is_in_bounds(position) {
            tracing::debug!(%position, "ignoring out-of-bounds input");
            return Ok(InputOutcome::new(self.phase, events));
        }

        match self.phase {
            Phase::Idle => {
                if let Some(id) = self.eligible_unit_at(position) {
                    self.select(id, &mut events);
                }
            }
            Phase::UnitSelected | Phase::PendingAttack => {
                let can_move_here =
                    self.phase == Phase::UnitSelected && self.legal_moves.contains(&position);

                if can_move_here {
                    self.execute_move(position, &mut events);
                } else if self.legal_attacks.contains(&position) {
                    self.execute_attack(position, &mut events);
                } else if let Some(id) = self.eligible_unit_at(position) {
                    self.select(id, &mut events);
                } else {
                    self.clear_selection(&mut events);
                }
            }
            Phase::GameOver(outcome) => return Err(SessionError::GameOver { outcome }),
        }

        Ok(InputOutcome::new(self.phase, events))
    }

    /// A unit the active player may select: any unit they own, spent or not.
    fn eligible_unit_at(&self, position: Position) -> Option<UnitId> {
        self.unit_at(position)
            .filter(|unit| unit.owner() == self.active_player)
            .map(|unit| unit.id())
    }

    fn select(&mut self, id: UnitId, events: &mut Vec<BattleEvent>) {
        let Some(index) = self.unit_index(id) else {
            return;
        };
        let unit = &self.units[index];

        let moves = if unit.can_move() {
            range::movement_range(&self.grid, &self.units, unit)
        } else {
            Default::default()
        };
        let attacks = if unit.can_attack() {
            range::attack_targets(&self.grid, &self.units, unit)
        } else {
            Default::default()
        };
        let position = unit.position();

        tracing::debug!(
            unit = %id,
            %position,
            moves = moves.len(),
            attacks = attacks.len(),
            "unit selected"
        );

        self.selection = Some(id);
        self.legal_moves = moves;
        self.legal_attacks = attacks;
        self.phase = Phase::UnitSelected;
        events.push(BattleEvent::UnitSelected {
            unit_id: id,
            position,
        });
    }

    pub(super) fn clear_selection(&mut self, events: &mut Vec<BattleEvent>) {
        if self.selection.take().is_some() {
            events.push(BattleEvent::SelectionCleared);
        }
        self.legal_moves.clear();
        self.legal_attacks.clear();
        if !self.phase.is_terminal() {
            self.phase = Phase::Idle;
        }
    }

    /// Moves the selected unit. `destination` is already a legal move.
    fn execute_move(&mut self, destination: Position, events: &mut Vec<BattleEvent>) {
        let Some(index) = self.selection.and_then(|id| self.unit_index(id)) else {
            return;
        };

        let from = self.units[index].position();
        self.units[index].move_to(destination);

        let unit = &self.units[index];
        let unit_id = unit.id();
        let can_attack = unit.can_attack();
        let attacks = if can_attack {
            range::attack_targets(&self.grid, &self.units, unit)
        } else {
            Default::default()
        };

        tracing::info!(unit = %unit_id, %from, to = %destination, "unit moved");
        events.push(BattleEvent::Moved {
            unit_id,
            from,
            to: destination,
        });

        self.legal_moves.clear();
        self.legal_attacks = attacks;
        if can_attack {
            self.phase = Phase::PendingAttack;
        } else {
            self.clear_selection(events);
        }
    }

    /// Resolves an attack from the selected unit. `target` is already legal.
    fn execute_attack(&mut self, target: Position, events: &mut Vec<BattleEvent>) {
        let Some(attacker_index) = self.selection.and_then(|id| self.unit_index(id)) else {
            return;
        };
        let Some(defender_index) = self.units.iter().position(|unit| unit.position() == target)
        else {
            return;
        };

        let attacker_id = self.units[attacker_index].id();
        let attack = self.units[attacker_index].archetype().attack;

        let defender = &mut self.units[defender_index];
        let defender_id = defender.id();
        let outcome = defender.apply_damage(attack);
        let remaining_hp = defender.current_hp();

        self.units[attacker_index].mark_attacked();

        tracing::info!(
            attacker = %attacker_id,
            defender = %defender_id,
            damage = outcome.actual_damage,
            remaining_hp,
            "attack resolved"
        );
        events.push(BattleEvent::Attacked {
            attacker_id,
            defender_id,
            damage: outcome.actual_damage,
            defender_died: outcome.died,
        });

        self.clear_selection(events);

        if outcome.died {
            self.units.remove(defender_index);
            tracing::info!(unit = %defender_id, position = %target, "unit destroyed");
            self.evaluate_victory(events);
        }
    }
}
