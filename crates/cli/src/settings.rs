//! Settings discovery.
//!
//! Order: `--config PATH`, then `<config_dir>/kenpo-check/config.toml` when
//! it exists, then built-in defaults.

use std::path::{Path, PathBuf};

use kenpo_recon::CheckSettings;

use crate::exit_codes::EXIT_CONFIG;
use crate::CliError;

const APP_DIR: &str = "kenpo-check";
const FILE_NAME: &str = "config.toml";

/// Per-user settings file, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(FILE_NAME))
}

pub fn load(explicit: Option<&Path>) -> Result<CheckSettings, CliError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_path().filter(|p| p.is_file()) {
            Some(p) => p,
            None => return Ok(CheckSettings::default()),
        },
    };

    let text = std::fs::read_to_string(&path).map_err(|e| CliError {
        code: EXIT_CONFIG,
        message: format!("cannot read settings {}: {e}", path.display()),
        hint: None,
    })?;

    CheckSettings::from_toml(&text).map_err(|e| CliError {
        code: EXIT_CONFIG,
        message: format!("{}: {e}", path.display()),
        hint: Some("every key is optional; delete the file to use the defaults".into()),
    })
}
