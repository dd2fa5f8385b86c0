//! Playing the queued techniques and handing the turn over.

use fight_core::{FighterId, FightingAction};
use state_machine::{Latch, State};

use super::delay::{Completion, Delay};
use super::{MindTransition, Observing};
use crate::api::{Result, RuntimeError, StateKind};
use crate::turns::MindContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    /// Waiting for playback of the queued techniques.
    #[default]
    Playing,
    /// Waiting for the turn switch delay.
    Switching,
    /// Stopped manually; nothing more happens this visit.
    Halted,
}

/// Performs the queued techniques, then passes the turn.
///
/// Once playback and the switch delay have both elapsed:
///
/// 1. the fight status is updated
/// 2. the controlled fighter starts observing again
/// 3. the turn passes to the other fighter
/// 4. the machine changes to [`Observing`]
/// 5. the receiving side's counters to the performed techniques are picked
///    and performed (dispatched by [`super::FightersMind::update`] once the
///    machine has settled in Observing)
#[derive(Debug, Default)]
pub struct Performing {
    latch: Latch,
    phase: Phase,
    delay: Option<Delay>,
    performed: Vec<FightingAction>,
}

impl Performing {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish_turn(&mut self, ctx: &mut MindContext, fighter: FighterId) -> Result<MindTransition> {
        ctx.services.status.update_status(ctx.services.arena.as_mut());
        ctx.controlled_fighter_mut(StateKind::Performing)?.observing_opponent = true;
        ctx.services.arena.set_next_turn();

        tracing::info!(
            "{} performed {} technique(s), turn {} passes on",
            fighter,
            self.performed.len(),
            ctx.arena().turn()
        );

        ctx.schedule_counters(std::mem::take(&mut self.performed));
        Ok(MindTransition::to(Observing::new()))
    }
}

impl State<MindContext, RuntimeError> for Performing {
    fn name(&self) -> &'static str {
        StateKind::Performing.as_str()
    }

    fn enter(&mut self, ctx: &mut MindContext) -> Result<()> {
        ctx.controlled_id(StateKind::Performing)?;
        self.latch.reset();
        self.phase = Phase::Playing;
        self.delay = None;
        self.performed.clear();
        tracing::info!("Entering state {}", self.name());
        Ok(())
    }

    fn execute(&mut self, ctx: &mut MindContext) -> Result<MindTransition> {
        let fighter = ctx.controlled_id(StateKind::Performing)?;

        if self.latch.trip() {
            self.performed = ctx.arena().fighting_actions().to_vec();
            let playback = ctx.services.playback.play(&self.performed);
            self.delay = Some(ctx.start_delay(playback));
        }

        loop {
            let completion = match self.phase {
                Phase::Halted => return Ok(MindTransition::Stay),
                _ => self.delay.as_ref().and_then(Delay::poll),
            };

            match (self.phase, completion) {
                (_, None) => return Ok(MindTransition::Stay),
                (_, Some(Completion::Cancelled)) => {
                    tracing::warn!("Performing was stopped manually during {:?}", self.phase);
                    self.phase = Phase::Halted;
                    self.delay = None;
                    ctx.clear_pending();
                    return Ok(MindTransition::Stay);
                }
                (Phase::Playing, Some(Completion::Natural)) => {
                    let duration = ctx.timing.turn_switch_delay();
                    self.delay = Some(ctx.start_delay(duration));
                    self.phase = Phase::Switching;
                }
                (Phase::Switching, Some(Completion::Natural)) => {
                    ctx.clear_pending();
                    self.delay = None;
                    return self.finish_turn(ctx, fighter);
                }
                (Phase::Halted, Some(Completion::Natural)) => return Ok(MindTransition::Stay),
            }
        }
    }

    fn exit(&mut self, _ctx: &mut MindContext) -> Result<()> {
        tracing::debug!("Exiting state {}", self.name());
        Ok(())
    }
}
