//! Simulation settings read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings of one simulated fight.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Directory holding `config.toml` and `roster.ron`.
    pub data_dir: PathBuf,
    /// Overrides `<data_dir>/config.toml`.
    pub config_path: Option<PathBuf>,
    /// Overrides `<data_dir>/roster.ron`.
    pub roster_path: Option<PathBuf>,
    /// Turns to play before the simulation stops.
    pub turns: u32,
    /// Seeds both decision engines; entropy when unset.
    pub seed: Option<u64>,
    /// How long the console playback pretends each technique lasts.
    pub playback_ms: u64,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            config_path: None,
            roster_path: None,
            turns: 10,
            seed: None,
            playback_ms: 400,
            session_id: None,
            log_dir: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FIGHT_DATA_DIR` - Directory with `config.toml` and `roster.ron` (default: `data`)
    /// - `FIGHT_CONFIG` - Path of the mind configuration (default: `<data dir>/config.toml`)
    /// - `FIGHT_ROSTER` - Path of the roster (default: `<data dir>/roster.ron`)
    /// - `FIGHT_TURNS` - Turns to simulate (default: 10)
    /// - `FIGHT_SEED` - RNG seed for reproducible fights (default: entropy)
    /// - `FIGHT_PLAYBACK_MS` - Simulated playback time per technique (default: 400)
    /// - `FIGHT_SESSION_ID` - Log session identifier (default: timestamp)
    /// - `FIGHT_LOG_DIR` - Log root directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("FIGHT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.config_path = env::var("FIGHT_CONFIG").ok().map(PathBuf::from);
        config.roster_path = env::var("FIGHT_ROSTER").ok().map(PathBuf::from);

        if let Some(turns) = read_env::<u32>("FIGHT_TURNS") {
            config.turns = turns.max(1);
        }
        config.seed = read_env::<u64>("FIGHT_SEED");
        if let Some(playback) = read_env::<u64>("FIGHT_PLAYBACK_MS") {
            config.playback_ms = playback;
        }

        config.session_id = env::var("FIGHT_SESSION_ID").ok();
        config.log_dir = env::var("FIGHT_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_play_ten_turns_from_data_dir() {
        let config = SimConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.turns, 10);
        assert!(config.seed.is_none());
        assert!(config.config_path.is_none() && config.roster_path.is_none());
    }

    #[test]
    fn unset_variables_read_as_none() {
        assert_eq!(read_env::<u32>("FIGHT_SIM_TEST_UNSET_VARIABLE"), None);
    }
}
