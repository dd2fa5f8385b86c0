//! Physical condition factor.
//!
//! Tired fighters favour cheaper techniques. Above the threshold the factor
//! is neutral; below it arm techniques lose and leg techniques gain score in
//! proportion to the remaining endurance.

use fight_core::Action;

use super::{Appraisal, Factor, FactorContext};
use crate::api::DecisionError;

const BASE_SCORE: f32 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalConditionFactor;

impl Factor for PhysicalConditionFactor {
    fn name(&self) -> &'static str {
        "physical-condition"
    }

    fn evaluate(&self, action: &Action, ctx: &FactorContext<'_>) -> Result<Appraisal, DecisionError> {
        let endurance = ctx.input.conditions.endurance()?;
        let max = ctx.config.max_physical_condition;
        let body_part = action.proficiency().body_part();

        let score = if endurance >= ctx.config.physical_threshold * max {
            BASE_SCORE
        } else if body_part.is_arm() {
            BASE_SCORE - endurance / max
        } else if body_part.is_leg() {
            BASE_SCORE + endurance / max
        } else {
            BASE_SCORE
        };

        Ok(Appraisal::new(score))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use fight_core::{BodyPartKind, CoreError, FighterConditions, Strategy};

    fn score(endurance: f32, body_part: BodyPartKind) -> f32 {
        let scene = Scene::new(
            input(Strategy::WinTheFight, endurance),
            fighter_with_damage(BodyPartKind::Head, 0.0),
        );
        PhysicalConditionFactor
            .evaluate(&action("technique", body_part, 0.5), &scene.ctx())
            .unwrap()
            .score()
    }

    #[test]
    fn rested_fighter_is_neutral() {
        assert_eq!(score(10.0, BodyPartKind::LeftArm), 1.0);
        assert_eq!(score(10.0, BodyPartKind::RightLeg), 1.0);
    }

    #[test]
    fn exhausted_fighter_is_neutral_too() {
        assert_eq!(score(0.0, BodyPartKind::RightArm), 1.0);
        assert_eq!(score(0.0, BodyPartKind::LeftLeg), 1.0);
    }

    #[test]
    fn threshold_switches_behaviour() {
        // Exactly 75% of max is still considered rested.
        assert_eq!(score(7.5, BodyPartKind::LeftArm), 1.0);
        assert_eq!(score(7.5, BodyPartKind::LeftLeg), 1.0);

        assert!((score(7.0, BodyPartKind::LeftArm) - 0.3).abs() < 1e-6);
        assert!((score(7.0, BodyPartKind::LeftLeg) - 1.7).abs() < 1e-6);
    }

    #[test]
    fn non_limb_techniques_stay_neutral() {
        assert_eq!(score(3.0, BodyPartKind::Head), 1.0);
        assert_eq!(score(3.0, BodyPartKind::Torso), 1.0);
    }

    #[test]
    fn missing_endurance_is_an_error() {
        let mut scene = Scene::new(
            input(Strategy::WinTheFight, 10.0),
            fighter_with_damage(BodyPartKind::Head, 0.0),
        );
        scene.input.conditions = FighterConditions::new();

        let result = PhysicalConditionFactor.evaluate(&action("kick", BodyPartKind::LeftLeg, 0.5), &scene.ctx());
        assert_eq!(result, Err(DecisionError::Core(CoreError::EmptyConditions)));
    }
}
