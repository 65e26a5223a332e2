use skirmish_core::{BattleEvent, BattleSession, Outcome, UnitId};

/// Human readable line for one battle event.
pub fn describe_event(session: &BattleSession, event: &BattleEvent) -> String {
    match event {
        BattleEvent::UnitSelected { unit_id, position } => {
            format!("selected {} at {}", unit_name(session, *unit_id), position)
        }
        BattleEvent::SelectionCleared => "selection cleared".to_string(),
        BattleEvent::Moved { unit_id, from, to } => {
            format!("{} moved {} -> {}", unit_name(session, *unit_id), from, to)
        }
        BattleEvent::Attacked {
            attacker_id,
            defender_id,
            damage,
            defender_died,
        } => {
            let attacker = unit_name(session, *attacker_id);
            if *defender_died {
                format!("{attacker} hits {defender_id} for {damage}, defender destroyed")
            } else {
                format!(
                    "{attacker} hits {} for {damage}",
                    unit_name(session, *defender_id)
                )
            }
        }
        BattleEvent::TurnEnded { new_active_player } => {
            format!("turn over, {new_active_player} to act")
        }
        BattleEvent::GameOver { outcome } => match outcome {
            Outcome::Winner(player) => format!("game over, {player} wins"),
            Outcome::Draw => "game over, draw".to_string(),
        },
    }
}

/// Falls back to the bare id once the unit has been removed.
fn unit_name(session: &BattleSession, id: UnitId) -> String {
    session
        .unit(id)
        .map(|unit| {
            format!(
                "{} {} ({}/{})",
                unit.archetype().display_name,
                id,
                unit.current_hp(),
                unit.max_hp()
            )
        })
        .unwrap_or_else(|| id.to_string())
}
