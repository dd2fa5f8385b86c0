//! Attacker body-part factor.
//!
//! Penalises techniques executed with a damaged limb:
//!
//! ```text
//! damage ≤ 5   → 1.0
//! damage ≤ 35  → 1 − damage/100
//! damage ≤ 85  → (1 − damage/100) / 1.5
//! damage > 85  → 0.0   (limb disabled)
//! ```

use fight_core::Action;

use super::{Appraisal, Factor, FactorContext};
use crate::api::DecisionError;

const BASE_SCORE: f32 = 1.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct AttackerBodyPartFactor;

impl Factor for AttackerBodyPartFactor {
    fn name(&self) -> &'static str {
        "attacker-body-part"
    }

    fn evaluate(&self, action: &Action, ctx: &FactorContext<'_>) -> Result<Appraisal, DecisionError> {
        let kind = action.proficiency().body_part();
        let damage = ctx.fighter.body.find_by_kind(kind)?.damage_percentage;
        let config = ctx.config;

        let score = if damage <= config.intact_damage_limit {
            BASE_SCORE
        } else if damage <= config.light_damage_limit {
            BASE_SCORE - damage / 100.0
        } else if damage <= config.disabled_damage_limit {
            (BASE_SCORE - damage / 100.0) / config.body_part_damage_coefficient
        } else {
            0.0
        };

        Ok(Appraisal::new(score))
    }
}
