use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::filter::DEFAULT_MAX_DAYS_LEFT;

/// Env var naming an optional JSON config file.
pub const CONFIG_ENV: &str = "FARE_LENS_CONFIG";
/// Env var overriding the data file path.
pub const DATA_ENV: &str = "FARE_LENS_DATA";

// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV loaded at startup.
    pub data_path: PathBuf,
    /// Days-left bound applied after loading and on reset.
    pub default_max_days_left: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("delhi.csv"),
            default_max_days_left: DEFAULT_MAX_DAYS_LEFT,
        }
    }
}

impl DashboardConfig {
    /// Resolve the configuration. Later sources win:
    /// defaults → `$FARE_LENS_CONFIG` JSON → `$FARE_LENS_DATA` → first CLI argument.
    pub fn load() -> Result<Self> {
        let config_file = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve(
            config_file.as_deref(),
            std::env::var_os(DATA_ENV),
            std::env::args_os().nth(1),
        )
    }

    /// Merge the given sources over the defaults, later ones winning.
    pub fn resolve(
        config_file: Option<&Path>,
        data_env: Option<OsString>,
        arg: Option<OsString>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        if let Some(data) = arg.or(data_env) {
            config.data_path = PathBuf::from(data);
        }
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("delhi.csv"));
        assert_eq!(config.default_max_days_left, 50);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "data_path": "data/bom.csv" }"#).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/bom.csv"));
        assert_eq!(config.default_max_days_left, 50);

        let config = DashboardConfig::from_json(r#"{ "default_max_days_left": 30 }"#).unwrap();
        assert_eq!(config.default_max_days_left, 30);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(DashboardConfig::from_json("{ nope").is_err());
        assert!(DashboardConfig::from_json_file(Path::new("/no/such/config.json")).is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "data_path": "json.csv", "default_max_days_left": 20 }}"#).unwrap();
        let json = Some(file.path());

        let config = DashboardConfig::resolve(None, None, None).unwrap();
        assert_eq!(config, DashboardConfig::default());

        let config = DashboardConfig::resolve(json, None, None).unwrap();
        assert_eq!(config.data_path, PathBuf::from("json.csv"));
        assert_eq!(config.default_max_days_left, 20);

        let config = DashboardConfig::resolve(json, Some("env.csv".into()), None).unwrap();
        assert_eq!(config.data_path, PathBuf::from("env.csv"));
        assert_eq!(config.default_max_days_left, 20);

        let config =
            DashboardConfig::resolve(json, Some("env.csv".into()), Some("arg.csv".into())).unwrap();
        assert_eq!(config.data_path, PathBuf::from("arg.csv"));
        assert_eq!(config.default_max_days_left, 20);
    }

    #[test]
    fn test_resolve_bad_config_file_is_error() {
        let result = DashboardConfig::resolve(
            Some(Path::new("/no/such/config.json")),
            None,
            Some("arg.csv".into()),
        );
        assert!(result.is_err());
    }
}
