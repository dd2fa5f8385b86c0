//! Fighter AI configuration loader.

use std::path::Path;

use fight_core::MindConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`MindConfig`] from TOML files.
///
/// Every key is optional; missing ones keep their defaults.
///
/// ```toml
/// [scoring]
/// physical_threshold = 0.75
///
/// [timing]
/// deciding_secs = 2.0
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing MindConfig
    pub fn load(path: &Path) -> LoadResult<MindConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<MindConfig> {
        let config: MindConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.scoring.max_physical_condition <= 0.0 {
            anyhow::bail!(
                "scoring.max_physical_condition must be positive, got {}",
                config.scoring.max_physical_condition
            );
        }
        if config.scoring.practice_divisor <= 0.0 || config.scoring.win_divisor <= 0.0 {
            anyhow::bail!("scoring divisors must be positive");
        }

        Ok(config)
    }
}
