//! Configuration loading for the Meander CLI.
//!
//! Configuration is resolved in order: an explicit `--config` path, then
//! `config.toml` in the platform configuration directory, then built-in
//! defaults. An explicit path must exist; the platform file is optional.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::debug;

use meander::{MeanderError, config::AppConfig};

/// Load the application configuration.
///
/// # Arguments
///
/// * `explicit_path` - Path supplied with `--config`, if any
///
/// # Errors
///
/// Returns `MeanderError::Io` if an explicitly requested file cannot be
/// read and `MeanderError::Config` if a file exists but does not parse.
pub fn load_config(explicit_path: Option<&String>) -> Result<AppConfig, MeanderError> {
    if let Some(path) = explicit_path {
        debug!(path; "Loading configuration file");
        let source = fs::read_to_string(path)?;
        return parse_config(&source, path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            debug!(path:? = path; "Loading platform configuration file");
            let source = fs::read_to_string(&path)?;
            parse_config(&source, &path.display().to_string())
        }
        _ => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn parse_config(source: &str, path: &str) -> Result<AppConfig, MeanderError> {
    toml::from_str(source)
        .map_err(|err| MeanderError::Config(format!("invalid config file `{path}`: {err}")))
}

/// The platform-specific default configuration file location.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "meander").map(|dirs| dirs.config_dir().join("config.toml"))
}
