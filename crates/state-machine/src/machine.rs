//! The state machine itself.
//!
//! [`StateMachine`] owns three slots: the current state, the state that was
//! current immediately before it, and an optional global state. States drive
//! the machine by returning a [`Transition`] from `execute`; callers may also
//! switch states directly with [`StateMachine::change_state`].

use core::fmt;

use crate::{State, Transition};

/// Misuse of the machine's revert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {
    /// Revert requested before any transition happened.
    NoPreviousState,

    /// Revert requested right after another revert.
    ///
    /// Only one level of history is kept, so a second revert would bounce
    /// back to the state that was just left.
    ConsecutiveRevert,
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineError::NoPreviousState => f.write_str("no previous state to revert to"),
            MachineError::ConsecutiveRevert => {
                f.write_str("cannot revert twice in a row: only one previous state is kept")
            }
        }
    }
}

impl std::error::Error for MachineError {}

/// Finite state machine over a context `C` with state errors `E`.
pub struct StateMachine<C, E> {
    current: Option<Box<dyn State<C, E>>>,
    previous: Option<Box<dyn State<C, E>>>,
    global: Option<Box<dyn State<C, E>>>,
    just_reverted: bool,
}

impl<C, E> Default for StateMachine<C, E> {
    fn default() -> Self {
        Self {
            current: None,
            previous: None,
            global: None,
            just_reverted: false,
        }
    }
}

impl<C, E> StateMachine<C, E>
where
    E: From<MachineError>,
{
    /// Creates an empty machine. Nothing is current until the first
    /// [`StateMachine::change_state`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs (or clears) the global state.
    ///
    /// The global state is never entered or exited; it only executes.
    pub fn set_global_state(&mut self, state: Option<Box<dyn State<C, E>>>) {
        self.global = state;
    }

    /// Name of the current state, if any.
    pub fn current_state(&self) -> Option<&'static str> {
        self.current.as_ref().map(|state| state.name())
    }

    /// Name of the state that was current before the last switch.
    pub fn previous_state(&self) -> Option<&'static str> {
        self.previous.as_ref().map(|state| state.name())
    }

    pub fn global_state(&self) -> Option<&'static str> {
        self.global.as_ref().map(|state| state.name())
    }

    /// Returns true if the current state has the given name.
    pub fn is_in(&self, name: &str) -> bool {
        self.current_state() == Some(name)
    }

    /// Exits the current state (if any), keeps it as the previous state and
    /// enters `state`.
    ///
    /// On a fresh machine no `exit` is called.
    ///
    /// # Errors
    ///
    /// Propagates the error of the old state's `exit`, in which case the old
    /// state stays current and `state` is never entered, or of the new
    /// state's `enter`, in which case it is current regardless.
    pub fn change_state(&mut self, state: Box<dyn State<C, E>>, ctx: &mut C) -> Result<(), E> {
        self.exit_current(ctx)?;
        self.just_reverted = false;
        self.install(state, ctx)
    }

    /// Re-enters the previous state without replaying anything in between.
    ///
    /// After `A → B → C` a revert makes `B` current and `C` previous.
    ///
    /// # Errors
    ///
    /// - [`MachineError::NoPreviousState`] if nothing was current before
    /// - [`MachineError::ConsecutiveRevert`] if the last switch was a revert
    /// - the current state's `exit` error; both slots are then left as they were
    pub fn revert_to_previous_state(&mut self, ctx: &mut C) -> Result<(), E> {
        if self.just_reverted {
            return Err(MachineError::ConsecutiveRevert.into());
        }
        if self.previous.is_none() {
            return Err(MachineError::NoPreviousState.into());
        }
        self.exit_current(ctx)?;
        let previous = self.previous.take().ok_or(MachineError::NoPreviousState)?;
        self.install(previous, ctx)?;
        self.just_reverted = true;
        Ok(())
    }

    /// Runs one scheduler tick: the global state first, then the current
    /// state, applying each returned transition immediately.
    pub fn update(&mut self, ctx: &mut C) -> Result<(), E> {
        if let Some(global) = self.global.as_mut() {
            let transition = global.execute(ctx)?;
            self.apply(transition, ctx)?;
        }

        let transition = match self.current.as_mut() {
            Some(current) => current.execute(ctx)?,
            None => return Ok(()),
        };
        self.apply(transition, ctx)
    }

    fn apply(&mut self, transition: Transition<C, E>, ctx: &mut C) -> Result<(), E> {
        match transition {
            Transition::Stay => Ok(()),
            Transition::Change(state) => self.change_state(state, ctx),
            Transition::Revert => self.revert_to_previous_state(ctx),
        }
    }

    /// Runs the current state's `exit` without touching either slot.
    fn exit_current(&mut self, ctx: &mut C) -> Result<(), E> {
        match self.current.as_mut() {
            Some(current) => current.exit(ctx),
            None => Ok(()),
        }
    }

    /// Moves the (already exited) current state to `previous` and enters `state`.
    fn install(&mut self, mut state: Box<dyn State<C, E>>, ctx: &mut C) -> Result<(), E> {
        if let Some(old) = self.current.take() {
            self.previous = Some(old);
        }

        let entered = state.enter(ctx);
        self.current = Some(state);
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        log: Vec<String>,
        advance: bool,
        refuse_exit: bool,
    }

    /// Logs every callback; moves to `next` when the context says so.
    struct Recorder {
        name: &'static str,
        next: Option<&'static str>,
    }

    impl Recorder {
        fn boxed(name: &'static str) -> Box<dyn State<TestContext, MachineError>> {
            Box::new(Recorder { name, next: None })
        }

        fn chained(name: &'static str, next: &'static str) -> Box<dyn State<TestContext, MachineError>> {
            Box::new(Recorder {
                name,
                next: Some(next),
            })
        }
    }

    impl State<TestContext, MachineError> for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn enter(&mut self, ctx: &mut TestContext) -> Result<(), MachineError> {
            ctx.log.push(format!("enter {}", self.name));
            Ok(())
        }

        fn execute(
            &mut self,
            ctx: &mut TestContext,
        ) -> Result<Transition<TestContext, MachineError>, MachineError> {
            ctx.log.push(format!("execute {}", self.name));
            match self.next {
                Some(next) if ctx.advance => Ok(Transition::Change(Recorder::boxed(next))),
                _ => Ok(Transition::Stay),
            }
        }

        fn exit(&mut self, ctx: &mut TestContext) -> Result<(), MachineError> {
            if ctx.refuse_exit {
                return Err(MachineError::NoPreviousState);
            }
            ctx.log.push(format!("exit {}", self.name));
            Ok(())
        }
    }

    #[test]
    fn first_change_enters_without_exit() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();

        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();

        assert_eq!(machine.current_state(), Some("A"));
        assert_eq!(machine.previous_state(), None);
        assert_eq!(ctx.log, ["enter A"]);
    }

    #[test]
    fn change_exits_old_then_enters_new() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();

        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();
        machine.change_state(Recorder::boxed("B"), &mut ctx).unwrap();

        assert_eq!(machine.current_state(), Some("B"));
        assert_eq!(machine.previous_state(), Some("A"));
        assert_eq!(ctx.log, ["enter A", "exit A", "enter B"]);
    }

    #[test]
    fn revert_is_one_level() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();

        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();
        machine.change_state(Recorder::boxed("B"), &mut ctx).unwrap();
        machine.change_state(Recorder::boxed("C"), &mut ctx).unwrap();
        ctx.log.clear();

        machine.revert_to_previous_state(&mut ctx).unwrap();

        assert_eq!(machine.current_state(), Some("B"));
        assert_eq!(machine.previous_state(), Some("C"));
        assert_eq!(ctx.log, ["exit C", "enter B"]);
    }

    #[test]
    fn consecutive_revert_fails_fast() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();

        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();
        machine.change_state(Recorder::boxed("B"), &mut ctx).unwrap();
        machine.revert_to_previous_state(&mut ctx).unwrap();

        assert_eq!(
            machine.revert_to_previous_state(&mut ctx),
            Err(MachineError::ConsecutiveRevert)
        );
        assert_eq!(machine.current_state(), Some("A"));

        // A forward transition re-arms revert.
        machine.change_state(Recorder::boxed("C"), &mut ctx).unwrap();
        machine.revert_to_previous_state(&mut ctx).unwrap();
        assert_eq!(machine.current_state(), Some("A"));
    }

    #[test]
    fn revert_without_previous_fails() {
        let mut ctx = TestContext::default();
        let mut machine: StateMachine<TestContext, MachineError> = StateMachine::new();
        assert_eq!(
            machine.revert_to_previous_state(&mut ctx),
            Err(MachineError::NoPreviousState)
        );

        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();
        assert_eq!(
            machine.revert_to_previous_state(&mut ctx),
            Err(MachineError::NoPreviousState)
        );
    }

    #[test]
    fn update_runs_global_before_current() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();
        machine.set_global_state(Some(Recorder::boxed("G")));
        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();
        ctx.log.clear();

        machine.update(&mut ctx).unwrap();
        machine.update(&mut ctx).unwrap();

        assert_eq!(machine.global_state(), Some("G"));
        assert_eq!(ctx.log, ["execute G", "execute A", "execute G", "execute A"]);
    }

    #[test]
    fn update_on_empty_machine_is_noop() {
        let mut ctx = TestContext::default();
        let mut machine: StateMachine<TestContext, MachineError> = StateMachine::new();
        machine.update(&mut ctx).unwrap();
        assert!(ctx.log.is_empty());
    }

    #[test]
    fn states_drive_their_own_transitions() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();
        machine.change_state(Recorder::chained("A", "B"), &mut ctx).unwrap();

        machine.update(&mut ctx).unwrap();
        assert!(machine.is_in("A"));

        ctx.advance = true;
        machine.update(&mut ctx).unwrap();
        assert!(machine.is_in("B"));
        assert_eq!(machine.previous_state(), Some("A"));
    }

    #[test]
    fn failed_exit_keeps_the_old_state() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();
        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();
        ctx.refuse_exit = true;
        ctx.log.clear();

        assert!(machine.change_state(Recorder::boxed("B"), &mut ctx).is_err());

        assert_eq!(machine.current_state(), Some("A"));
        assert_eq!(machine.previous_state(), None);
        assert!(ctx.log.is_empty());

        ctx.refuse_exit = false;
        machine.change_state(Recorder::boxed("B"), &mut ctx).unwrap();
        assert_eq!(ctx.log, ["exit A", "enter B"]);
    }

    #[test]
    fn failed_exit_keeps_revert_available() {
        let mut ctx = TestContext::default();
        let mut machine = StateMachine::new();
        machine.change_state(Recorder::boxed("A"), &mut ctx).unwrap();
        machine.change_state(Recorder::boxed("B"), &mut ctx).unwrap();
        ctx.refuse_exit = true;

        assert!(machine.revert_to_previous_state(&mut ctx).is_err());
        assert_eq!(machine.current_state(), Some("B"));
        assert_eq!(machine.previous_state(), Some("A"));

        ctx.refuse_exit = false;
        machine.revert_to_previous_state(&mut ctx).unwrap();
        assert_eq!(machine.current_state(), Some("A"));
        assert_eq!(machine.previous_state(), Some("B"));
    }
}
