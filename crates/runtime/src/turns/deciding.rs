//! Picking this turn's techniques.

use state_machine::{Latch, State};

use super::delay::{Completion, Delay};
use super::{MindTransition, Performing};
use crate::api::{DecisionError, Result, RuntimeError, StateKind};
use crate::turns::MindContext;

/// Waits for the deciding delay, runs the decision engine exactly once and
/// moves on to performing.
#[derive(Debug, Default)]
pub struct Deciding {
    latch: Latch,
    delay: Option<Delay>,
}

impl Deciding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the engine for the controlled fighter and queues its picks.
    fn decide(ctx: &mut MindContext) -> Result<()> {
        let fighter = ctx.controlled_id(StateKind::Deciding)?;
        let active = ctx
            .arena()
            .active_fighter()
            .map(|active| active.id)
            .ok_or(DecisionError::NoActiveFighter)?;
        if active != fighter {
            return Err(RuntimeError::NotFightersTurn { fighter, active });
        }

        let input = ctx.take_decision_input()?;
        let queued = ctx.tactical.decide(&input, ctx.services.arena.as_mut())?;

        tracing::info!(
            "{} queued {} technique(s) on turn {}: {:?}",
            fighter,
            queued.len(),
            input.turn,
            queued
                .iter()
                .map(|action| action.technique.name.as_str())
                .collect::<Vec<_>>()
        );
        Ok(())
    }
}

impl State<MindContext, RuntimeError> for Deciding {
    fn name(&self) -> &'static str {
        StateKind::Deciding.as_str()
    }

    fn enter(&mut self, ctx: &mut MindContext) -> Result<()> {
        ctx.controlled_id(StateKind::Deciding)?;
        self.latch.reset();
        self.delay = None;
        tracing::info!("Entering state {}", self.name());
        Ok(())
    }

    fn execute(&mut self, ctx: &mut MindContext) -> Result<MindTransition> {
        ctx.controlled_id(StateKind::Deciding)?;

        if self.latch.trip() {
            let duration = ctx.timing.deciding_delay();
            self.delay = Some(ctx.start_delay(duration));
        }

        match self.delay.as_ref().and_then(Delay::poll) {
            None => Ok(MindTransition::Stay),
            Some(Completion::Natural) => {
                ctx.clear_pending();
                self.delay = None;
                Self::decide(ctx)?;
                Ok(MindTransition::to(Performing::new()))
            }
            Some(Completion::Cancelled) => {
                tracing::warn!("Deciding delay was stopped manually");
                self.delay = None;
                ctx.clear_pending();
                Ok(MindTransition::Stay)
            }
        }
    }

    fn exit(&mut self, _ctx: &mut MindContext) -> Result<()> {
        tracing::debug!("Exiting state {}", self.name());
        Ok(())
    }
}
