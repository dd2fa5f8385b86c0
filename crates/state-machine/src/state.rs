//! Core state trait.
//!
//! This module defines the [`State`] trait, the fundamental abstraction for
//! every state of a [`crate::StateMachine`]. The trait is generic over a
//! context type `C` (the agent and its collaborators) and an error type `E`.

use crate::Transition;

/// A state an agent can be in.
pub trait State<C, E>: Send {
    /// Short identifier used for logging and assertions.
    fn name(&self) -> &'static str;

    /// Called exactly once when the machine switches into this state.
    ///
    /// Returning an error aborts the switch; the state still becomes current
    /// so the caller can inspect it, but it never executed.
    fn enter(&mut self, _ctx: &mut C) -> Result<(), E> {
        Ok(())
    }

    /// Called on every tick while this state is current (or every tick, for
    /// the global state).
    ///
    /// # Returns
    ///
    /// The [`Transition`] the machine applies once this call returns.
    fn execute(&mut self, ctx: &mut C) -> Result<Transition<C, E>, E>;

    /// Called exactly once when the machine switches away from this state.
    fn exit(&mut self, _ctx: &mut C) -> Result<(), E> {
        Ok(())
    }
}

/// Blanket implementation for boxed states.
impl<C, E> State<C, E> for Box<dyn State<C, E>> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn enter(&mut self, ctx: &mut C) -> Result<(), E> {
        (**self).enter(ctx)
    }

    #[inline]
    fn execute(&mut self, ctx: &mut C) -> Result<Transition<C, E>, E> {
        (**self).execute(ctx)
    }

    #[inline]
    fn exit(&mut self, ctx: &mut C) -> Result<(), E> {
        (**self).exit(ctx)
    }
}
