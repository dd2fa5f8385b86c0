//! Headless fight simulator.
//!
//! Loads a mind configuration and a roster, then plays a fight between the
//! roster's player and its first opponent, logging every turn.
//!
//! ```bash
//! FIGHT_DATA_DIR=data FIGHT_TURNS=12 FIGHT_SEED=7 cargo run -p fight-sim
//! ```
mod config;
mod console;
mod logging;
mod sim;

use anyhow::{Context, Result};
use fight_content::{ConfigLoader, ContentFactory, RosterLoader};

use crate::config::SimConfig;
use crate::sim::Simulation;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();
    let _guard = logging::setup_logging(&config.session_id, config.log_dir.clone())?;

    tracing::info!("Starting fight simulation");
    tracing::info!("Turns: {}", config.turns);
    tracing::info!("Seed: {:?}", config.seed);

    let factory = ContentFactory::new(&config.data_dir);
    let mind_config = match &config.config_path {
        Some(path) => {
            ConfigLoader::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => factory.load_config().context("loading mind configuration")?,
    };
    let roster = match &config.roster_path {
        Some(path) => {
            RosterLoader::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => factory.load_roster().context("loading roster")?,
    };
    tracing::debug!("Loaded {} fighters", roster.fighters().len());

    let mut simulation = Simulation::new(roster, &mind_config, &config)?;
    let summary = simulation.run().await?;

    tracing::info!("Fight over after {} turns", summary.turns_played);
    for entry in &summary.opponent_picks {
        tracing::info!("  turn {:>3}: {}", entry.turn, entry.action.name());
    }

    Ok(())
}
