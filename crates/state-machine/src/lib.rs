//! Lightweight finite state machine for tick-driven agents.
//!
//! This library provides a minimal state machine in which states decide their
//! own successors. It is designed for game agents that are ticked once per
//! frame by an external scheduler.
//!
//! - **Enter/Execute/Exit contract**: `enter` once on transition-in, `exit`
//!   once on transition-out, `execute` on every tick while current
//! - **Global state**: an optional state executed every tick before the
//!   current one, regardless of which state is current
//! - **One-level revert**: the previous state is kept so the machine can step
//!   back once; there is no history stack
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`State`]: Core trait for all states
//! - [`Transition`]: What a state asks the machine to do after a tick
//! - [`StateMachine`]: Holds the current, previous and global states
//! - [`Latch`]: One-shot guard for effects that must run once per visit

pub mod latch;
pub mod machine;
pub mod state;
pub mod transition;

// Re-export core types for ergonomic API
pub use latch::Latch;
pub use machine::{MachineError, StateMachine};
pub use state::State;
pub use transition::Transition;
