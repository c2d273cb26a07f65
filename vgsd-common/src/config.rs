//! Configuration loading and resolution
//!
//! Dataset path and listen port resolve through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use std::path::PathBuf;

/// Default listen port for the dashboard service
pub const DEFAULT_PORT: u16 = 5730;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET: &str = "data/vgsales.csv";

/// Environment variable overriding the dataset path
pub const ENV_DATASET: &str = "VGSD_DATA";

/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "VGSD_PORT";

/// Resolve the dataset path following the 4-tier priority order
pub fn resolve_dataset_path(cli_arg: Option<&str>) -> PathBuf {
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var(ENV_DATASET) {
        return PathBuf::from(path);
    }

    if let Some(path) = config_file_value("data") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_DATASET)
}

/// Resolve the listen port following the 4-tier priority order.
///
/// A non-numeric value at any tier is a configuration error rather than a
/// silent fallthrough to the next tier.
pub fn resolve_port(cli_arg: Option<u16>) -> Result<u16> {
    if let Some(port) = cli_arg {
        return Ok(port);
    }

    if let Ok(raw) = std::env::var(ENV_PORT) {
        return raw
            .parse()
            .map_err(|_| Error::Config(format!("{} is not a valid port: {}", ENV_PORT, raw)));
    }

    if let Some(raw) = config_file_value("port") {
        return raw
            .parse()
            .map_err(|_| Error::Config(format!("config file port is not valid: {}", raw)));
    }

    Ok(DEFAULT_PORT)
}

/// Read one key from the platform config file, if the file exists
fn config_file_value(key: &str) -> Option<String> {
    let path = config_file_path()?;
    let contents = std::fs::read_to_string(path).ok()?;
    let config: toml::Value = toml::from_str(&contents).ok()?;
    match config.get(key)? {
        toml::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Platform config file location: `<config dir>/vgsd/config.toml`
fn config_file_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("vgsd").join("config.toml");
    path.exists().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arg_wins_for_dataset() {
        let path = resolve_dataset_path(Some("/tmp/custom.csv"));
        assert_eq!(path, PathBuf::from("/tmp/custom.csv"));
    }

    #[test]
    fn test_cli_arg_wins_for_port() {
        assert_eq!(resolve_port(Some(9000)).unwrap(), 9000);
    }
}
