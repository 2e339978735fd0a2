//! Global cabbook configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

static DEFAULT_DATA_FILE: &str = "~/.local/share/cabbook/bookings.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Global configuration at ~/.config/cabbook/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct CabbookConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl CabbookConfig {
    pub fn config_path() -> LedgerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LedgerError::Config("Could not determine config directory".into()))?
            .join("cabbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first run.
    pub fn load() -> LedgerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: CabbookConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| LedgerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LedgerError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Where the booking store lives, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> LedgerResult<()> {
        let contents = format!(
            "\
# cabbook configuration

# Where your bookings are stored:
# data_file = \"{}\"
",
            DEFAULT_DATA_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LedgerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_file_key_falls_back_to_default() {
        let config: CabbookConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn data_path_expands_tilde() {
        let config = CabbookConfig {
            data_file: PathBuf::from("~/bookings.json"),
        };
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
