//! Data-driven fight content and loaders.
//!
//! This crate reads the data files a simulated fight is built from:
//! - Fighter rosters with techniques, style ranks and conditions (RON)
//! - Fighter AI tuning, i.e. scoring constants and delays (TOML)
//!
//! All loaders deserialize into `fight-core` types, validating at the
//! boundary so the runtime only ever sees well-formed data.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, Roster, RosterEntry, RosterLoader, TechniqueSpec,
};
