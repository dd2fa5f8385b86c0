//! Simulated planning pause before deciding.

use state_machine::{Latch, State};

use super::delay::{Completion, Delay};
use super::{Deciding, MindTransition};
use crate::api::{Result, RuntimeError, StateKind};
use crate::turns::MindContext;

/// Waits for the strategizing delay, then moves on to deciding.
///
/// The delay is started on the first tick of each visit. A cancelled delay
/// leaves the machine here until it is changed or reverted from outside.
#[derive(Debug, Default)]
pub struct Strategizing {
    latch: Latch,
    delay: Option<Delay>,
}

impl Strategizing {
    pub fn new() -> Self {
        Self::default()
    }
}

impl State<MindContext, RuntimeError> for Strategizing {
    fn name(&self) -> &'static str {
        StateKind::Strategizing.as_str()
    }

    fn enter(&mut self, ctx: &mut MindContext) -> Result<()> {
        ctx.controlled_id(StateKind::Strategizing)?;
        self.latch.reset();
        self.delay = None;
        tracing::info!("Entering state {}", self.name());
        Ok(())
    }

    fn execute(&mut self, ctx: &mut MindContext) -> Result<MindTransition> {
        ctx.controlled_id(StateKind::Strategizing)?;

        if self.latch.trip() {
            let duration = ctx.timing.strategizing_delay();
            self.delay = Some(ctx.start_delay(duration));
        }

        match self.delay.as_ref().and_then(Delay::poll) {
            None => Ok(MindTransition::Stay),
            Some(Completion::Natural) => {
                ctx.clear_pending();
                Ok(MindTransition::to(Deciding::new()))
            }
            Some(Completion::Cancelled) => {
                tracing::warn!("Strategizing delay was stopped manually");
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
