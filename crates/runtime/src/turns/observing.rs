//! Watching the other fighter's turn.

use state_machine::State;

use super::{MindTransition, Strategizing};
use crate::api::{Result, RuntimeError, StateKind};
use crate::turns::MindContext;

/// Waits until the controlled fighter stops observing its opponent, then
/// moves on to strategizing.
///
/// The check runs on every tick; there is no one-shot effect here.
#[derive(Debug, Default)]
pub struct Observing;

impl Observing {
    pub fn new() -> Self {
        Self
    }
}

impl State<MindContext, RuntimeError> for Observing {
    fn name(&self) -> &'static str {
        StateKind::Observing.as_str()
    }

    fn enter(&mut self, ctx: &mut MindContext) -> Result<()> {
        ctx.controlled_id(StateKind::Observing)?;
        tracing::info!("Entering state {}", self.name());
        Ok(())
    }

    fn execute(&mut self, ctx: &mut MindContext) -> Result<MindTransition> {
        let fighter = ctx.controlled_fighter(StateKind::Observing)?;

        if fighter.observing_opponent {
            Ok(MindTransition::Stay)
        } else {
            Ok(MindTransition::to(Strategizing::new()))
        }
    }

    fn exit(&mut self, _ctx: &mut MindContext) -> Result<()> {
        tracing::debug!("Exiting state {}", self.name());
        Ok(())
    }
}
