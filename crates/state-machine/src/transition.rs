//! Transitions returned by states.

use crate::State;

/// What the machine should do after a state's `execute` returns.
pub enum Transition<C, E> {
    /// Remain in the current state.
    Stay,

    /// Exit the current state and enter the given one.
    Change(Box<dyn State<C, E>>),

    /// Exit the current state and re-enter the previous one.
    Revert,
}

impl<C, E> Transition<C, E> {
    /// Shorthand for `Transition::Change(Box::new(state))`.
    #[inline]
    pub fn to(state: impl State<C, E> + 'static) -> Self {
        Transition::Change(Box::new(state))
    }

    /// Returns `true` if this transition keeps the current state.
    #[inline]
    pub fn is_stay(&self) -> bool {
        matches!(self, Transition::Stay)
    }
}

impl<C, E> core::fmt::Debug for Transition<C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Transition::Stay => f.write_str("Stay"),
            Transition::Change(state) => f.debug_tuple("Change").field(&state.name()).finish(),
            Transition::Revert => f.write_str("Revert"),
        }
    }
}
