//! Client configuration and endpoint resolution
//!
//! The base URL is resolved in order: the `ECOADVICE_API_URL` environment
//! variable, then `~/.ecoadvice/config.toml`, then the local-development
//! default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AdviceError;

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "ECOADVICE_API_URL";

/// EcoAdvice API client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdviceConfig {
    /// Base URL of the API, including the version prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AdviceConfig {
    /// Build a configuration with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the configuration from the environment and the config file.
    ///
    /// `ECOADVICE_API_URL` wins over the file; a missing file yields the
    /// default configuration rather than an error.
    pub fn resolve(path: Option<&Path>) -> Result<Self, AdviceError> {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            return Ok(Self::new(url));
        }
        load_config(path)
    }

    /// URL of the home-profile collection endpoint.
    pub fn homes_url(&self) -> String {
        format!("{}/homes", self.base_url)
    }

    /// URL of a single home profile.
    pub fn home_url(&self, home_id: &str) -> String {
        format!("{}/homes/{}", self.base_url, home_id)
    }

    /// URL of the streaming advice endpoint for a home.
    pub fn advice_url(&self, home_id: &str) -> String {
        format!("{}/homes/{}/advice", self.base_url, home_id)
    }
}

/// Load the configuration file from the given path.
///
/// Defaults to `~/.ecoadvice/config.toml` if no path is provided. Returns
/// the default config if the file does not exist.
pub fn load_config(path: Option<&Path>) -> Result<AdviceConfig, AdviceError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let home = dirs::home_dir().ok_or_else(|| AdviceError::Config {
                reason: "could not determine home directory".to_string(),
            })?;
            home.join(".ecoadvice").join("config.toml")
        }
    };

    if !config_path.exists() {
        return Ok(AdviceConfig::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| AdviceError::Config {
        reason: format!("failed to read {}: {}", config_path.display(), e),
    })?;

    toml::from_str(&content).map_err(|e| AdviceError::Config {
        reason: format!("failed to parse {}: {}", config_path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_base_url() {
        let config = AdviceConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_endpoint_urls() {
        let config = AdviceConfig::new("https://api.ecoadvice.dev/api/v1");
        assert_eq!(
            config.homes_url(),
            "https://api.ecoadvice.dev/api/v1/homes"
        );
        assert_eq!(
            config.home_url("abc-123"),
            "https://api.ecoadvice.dev/api/v1/homes/abc-123"
        );
        assert_eq!(
            config.advice_url("abc-123"),
            "https://api.ecoadvice.dev/api/v1/homes/abc-123/advice"
        );
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = AdviceConfig::new("http://localhost:8000/api/v1/");
        assert_eq!(config.homes_url(), "http://localhost:8000/api/v1/homes");
    }

    #[test]
    fn test_load_missing_file_yields_default() {
        let config = load_config(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/api/v1");
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "https://staging.ecoadvice.dev/api/v1""#).unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://staging.ecoadvice.dev/api/v1");
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, AdviceError::Config { .. }));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "https://file.ecoadvice.dev/api/v1""#).unwrap();

        std::env::set_var(API_URL_ENV, "https://env.ecoadvice.dev/api/v1");
        let config = AdviceConfig::resolve(Some(file.path())).unwrap();
        std::env::remove_var(API_URL_ENV);

        assert_eq!(config.base_url, "https://env.ecoadvice.dev/api/v1");
    }

    #[test]
    #[serial]
    fn test_resolve_without_env_reads_file() {
        std::env::remove_var(API_URL_ENV);
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "https://file.ecoadvice.dev/api/v1""#).unwrap();
        let config = AdviceConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://file.ecoadvice.dev/api/v1");
    }
}
