mod config;
mod fixtures;

pub use config::{Config, DataConfig, DisplayConfig};
pub use fixtures::{FixtureSource, Fixtures, Student};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the weekplan data directory, creating it when missing.
///
/// `WEEKPLAN_HOME` wins when set. Otherwise `~/.config/weekplan`, or
/// `~/.config/weekplan-dev` with `WEEKPLAN_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("WEEKPLAN_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("WEEKPLAN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("weekplan-dev")
            } else {
                base_dir.join("weekplan")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
