//! Action history factor.
//!
//! Rewards variety: the longer an action has gone unused, the higher it
//! scores, up to a cap.
//!
//! ```text
//! score = base + min(turns_since_last_use / divisor, max_modifier)
//! ```
//!
//! The divisor depends on strategy. Practising fighters rotate techniques
//! quickly (divisor 10); fighters out to win barely care (divisor 100). With
//! no strategy there is no bonus at all.

use fight_core::{Action, Strategy};

use super::{Appraisal, Factor, FactorContext};
use crate::api::DecisionError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ActionHistoryFactor;

impl Factor for ActionHistoryFactor {
    fn name(&self) -> &'static str {
        "action-history"
    }

    fn evaluate(&self, action: &Action, ctx: &FactorContext<'_>) -> Result<Appraisal, DecisionError> {
        let config = ctx.config;
        let divisor = match ctx.input.strategy {
            Strategy::PracticeTechniques => config.practice_divisor,
            Strategy::WinTheFight => config.win_divisor,
            Strategy::None => return Ok(Appraisal::new(config.history_base_score)),
        };

        let turns = ctx.history.turns_since_last_use(action) as f32;
        let modifier = (turns / divisor).min(config.history_max_modifier);

        Ok(Appraisal::new(config.history_base_score + modifier))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use fight_core::BodyPartKind;

    fn scene(strategy: Strategy) -> Scene {
        Scene::new(input(strategy, 10.0), fighter_with_damage(BodyPartKind::Head, 0.0))
    }

    /// Records `action` on turn 1, then `spacer` on each turn up to `last_turn`.
    fn with_history(scene: &mut Scene, action: &Action, spacer: &Action, last_turn: u32) {
        scene.history.record(1, action.clone()).unwrap();
        for turn in 2..=last_turn {
            scene.history.record(turn, spacer.clone()).unwrap();
        }
    }

    #[test]
    fn unused_action_scores_base() {
        let scene = scene(Strategy::PracticeTechniques);
        let jab = action("jab", BodyPartKind::LeftArm, 0.5);

        let appraisal = ActionHistoryFactor.evaluate(&jab, &scene.ctx()).unwrap();
        assert_eq!(appraisal.score(), 0.5);
    }

    #[test]
    fn practice_grows_with_idle_turns() {
        let jab = action("jab", BodyPartKind::LeftArm, 0.5);
        let kick = action("kick", BodyPartKind::RightLeg, 0.5);

        let mut previous = 0.0;
        for last_turn in 1..=5 {
            let mut scene = scene(Strategy::PracticeTechniques);
            with_history(&mut scene, &jab, &kick, last_turn);
            let score = ActionHistoryFactor.evaluate(&jab, &scene.ctx()).unwrap().score();
            assert!(score > previous, "turn {last_turn}: {score} <= {previous}");
            previous = score;
        }
    }

    #[test]
    fn practice_bonus_is_capped() {
        let jab = action("jab", BodyPartKind::LeftArm, 0.5);
        let kick = action("kick", BodyPartKind::RightLeg, 0.5);

        // Ten distinct turns since the jab: 10 / 10 = 1.0, capped to 0.5.
        let mut scene = scene(Strategy::PracticeTechniques);
        with_history(&mut scene, &jab, &kick, 10);
        let score = ActionHistoryFactor.evaluate(&jab, &scene.ctx()).unwrap().score();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn winning_barely_rewards_variety() {
        let jab = action("jab", BodyPartKind::LeftArm, 0.5);
        let kick = action("kick", BodyPartKind::RightLeg, 0.5);

        let mut scene = scene(Strategy::WinTheFight);
        with_history(&mut scene, &jab, &kick, 5);
        let score = ActionHistoryFactor.evaluate(&jab, &scene.ctx()).unwrap().score();
        assert!((score - 0.55).abs() < 1e-6);
    }

    #[test]
    fn no_strategy_gives_no_bonus() {
        let jab = action("jab", BodyPartKind::LeftArm, 0.5);
        let kick = action("kick", BodyPartKind::RightLeg, 0.5);

        let mut scene = scene(Strategy::None);
        with_history(&mut scene, &jab, &kick, 8);
        let score = ActionHistoryFactor.evaluate(&jab, &scene.ctx()).unwrap().score();
        assert_eq!(score, 0.5);
    }
}
