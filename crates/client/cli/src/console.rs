//! Console stand-ins for the host game's services.
//!
//! Nothing is animated or resolved here: every call is logged and playback
//! reports a fixed duration per technique.
use std::time::Duration;

use fight_core::{CounterAction, FightingAction};
use fight_runtime::{ActionPlayback, FightArena, StatusUpdater, TechniqueActionPicker, TechniquePerformer};

#[derive(Clone, Debug)]
pub struct ConsoleServices {
    per_technique: Duration,
}

impl ConsoleServices {
    pub fn new(per_technique: Duration) -> Self {
        Self { per_technique }
    }
}

impl ActionPlayback for ConsoleServices {
    fn play(&mut self, actions: &[FightingAction]) -> Duration {
        for action in actions {
            tracing::info!(
                "{} throws {} ({:?} -> {:?} of {})",
                action.actor,
                action.technique.name,
                action.attacker_body_part,
                action.target_body_part,
                action.target
            );
        }
        self.per_technique * actions.len() as u32
    }
}

impl StatusUpdater for ConsoleServices {
    fn update_status(&mut self, arena: &mut dyn FightArena) {
        for fighter in arena.fighters() {
            let worst = fighter
                .body
                .iter()
                .max_by(|a, b| a.damage_percentage.total_cmp(&b.damage_percentage));
            if let Some(part) = worst {
                tracing::debug!(
                    "{} after turn {}: worst part {:?} at {:.0}%",
                    fighter.name,
                    arena.turn(),
                    part.kind,
                    part.damage_percentage
                );
            }
        }
    }
}

impl TechniqueActionPicker for ConsoleServices {
    /// Answers each technique with one aimed back at the attacking limb when
    /// the defender knows such a technique, or a guard of the hit part.
    fn pick_actions(&mut self, incoming: &[FightingAction], arena: &dyn FightArena) -> Vec<CounterAction> {
        incoming
            .iter()
            .map(|action| {
                let answer = arena.fighter(action.target).and_then(|defender| {
                    defender
                        .proficiencies
                        .iter()
                        .find(|p| p.technique.targets.contains(&action.attacker_body_part))
                });
                match answer {
                    Some(proficiency) => CounterAction {
                        performer: action.target,
                        body_part: proficiency.body_part(),
                        name: proficiency.name().to_string(),
                    },
                    None => CounterAction {
                        performer: action.target,
                        body_part: action.target_body_part,
                        name: "guard".to_string(),
                    },
                }
            })
            .collect()
    }
}

impl TechniquePerformer for ConsoleServices {
    fn perform_techniques(&mut self, actions: Vec<CounterAction>) {
        for action in actions {
            tracing::info!("{} counters with {} ({:?})", action.performer, action.name, action.body_part);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{
        BodyPartKind, Fighter, FighterId, FighterRole, Technique, TechniqueProficiency,
    };
    use fight_runtime::Arena;

    fn incoming() -> FightingAction {
        FightingAction {
            actor: FighterId(1),
            target: FighterId(0),
            attacker_body_part: BodyPartKind::RightLeg,
            target_body_part: BodyPartKind::Torso,
            technique: Technique::new("front kick", BodyPartKind::RightLeg, vec![BodyPartKind::Torso]),
        }
    }

    fn arena(defender_techniques: Vec<TechniqueProficiency>) -> Arena {
        Arena::new(vec![
            Fighter::new(FighterId(0), "Player", FighterRole::Player)
                .with_proficiencies(defender_techniques),
            Fighter::new(FighterId(1), "Opponent", FighterRole::Opponent),
        ])
    }

    #[test]
    fn counters_the_attacking_limb() {
        let sweep = TechniqueProficiency::new(
            Technique::new("low kick", BodyPartKind::LeftLeg, vec![BodyPartKind::RightLeg]),
            0.5,
        )
        .unwrap();
        let arena = arena(vec![sweep]);

        let counters = ConsoleServices::new(Duration::ZERO).pick_actions(&[incoming()], &arena);

        assert_eq!(counters.len(), 1);
        assert_eq!(counters[0].name, "low kick");
        assert_eq!(counters[0].performer, FighterId(0));
        assert_eq!(counters[0].body_part, BodyPartKind::LeftLeg);
    }

    #[test]
    fn guards_without_a_matching_technique() {
        let arena = arena(Vec::new());
        let counters = ConsoleServices::new(Duration::ZERO).pick_actions(&[incoming()], &arena);
        assert_eq!(counters[0].name, "guard");
        assert_eq!(counters[0].body_part, BodyPartKind::Torso);
    }

    #[test]
    fn playback_scales_with_technique_count() {
        let mut services = ConsoleServices::new(Duration::from_millis(300));
        assert_eq!(services.play(&[incoming(), incoming()]), Duration::from_millis(600));
        assert_eq!(services.play(&[]), Duration::ZERO);
    }
}
