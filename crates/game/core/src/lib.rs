//! Fight data model shared by the fighter AI and its tools.
//!
//! `fight-core` defines the reference data the AI reads (fighters, body
//! parts, technique proficiencies, conditions), the per-turn
//! [`DecisionInput`], the append-only [`ActionHistory`] and the tunable
//! [`MindConfig`]. It holds no behaviour beyond validation and lookups;
//! scoring and turn sequencing live in `fight-runtime`.
pub mod action;
pub mod body;
pub mod condition;
pub mod config;
pub mod error;
pub mod fighter;
pub mod history;
pub mod input;
pub mod style;
pub mod technique;

pub use action::{Action, CounterAction, FightingAction, TechniqueAction, Turn, TurnAction};
pub use body::{BodyPart, BodyPartKind, BodyParts};
pub use condition::{ConditionKind, FighterConditions};
pub use config::{MindConfig, ScoringConfig, TimingConfig};
pub use error::{CoreError, ErrorSeverity, FightError};
pub use fighter::{Fighter, FighterId, FighterRole};
pub use history::ActionHistory;
pub use input::DecisionInput;
pub use style::{FightingStyle, FightingStyleRank, Strategy};
pub use technique::{Technique, TechniqueProficiency};
