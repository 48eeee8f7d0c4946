//! Central module for client-wide configuration settings.
//!
//! This module loads the backend base URL, the location of the stored
//! credentials and the log filter from environment variables, optionally
//! overridden by a JSON file named in `LMS_CONFIG`.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_CREDENTIALS_PATH: &str = ".lms/credentials.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root every backend request is made against.
    pub api_base_url: String,
    pub credentials_path: PathBuf,
    pub log_filter: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClientConfigOverride {
    api_base_url: Option<String>,
    credentials_path: Option<PathBuf>,
    log_filter: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_env_or_file() -> Result<Self, ConfigError> {
        let mut config = Self::from_env();
        if let Ok(path) = std::env::var("LMS_CONFIG") {
            config.apply_file(&path)?;
        }
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: lookup("LMS_API_BASE_URL").unwrap_or(defaults.api_base_url),
            credentials_path: lookup("LMS_CREDENTIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.credentials_path),
            log_filter: lookup("LMS_LOG").unwrap_or(defaults.log_filter),
        }
    }

    fn apply_file(&mut self, path: &str) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let override_cfg: ClientConfigOverride =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_string(),
                source,
            })?;
        if let Some(value) = override_cfg.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = override_cfg.credentials_path {
            self.credentials_path = value;
        }
        if let Some(value) = override_cfg.log_filter {
            self.log_filter = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_env_is_empty() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn env_values_override_defaults() {
        let env: HashMap<&str, &str> = [
            ("LMS_API_BASE_URL", "https://lms.example.org/api"),
            ("LMS_CREDENTIALS_PATH", "/tmp/creds.json"),
            ("LMS_LOG", "debug"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()));
        assert_eq!(config.api_base_url, "https://lms.example.org/api");
        assert_eq!(config.credentials_path, PathBuf::from("/tmp/creds.json"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.json");
        std::fs::write(
            &path,
            r#"{"log_filter": "lms_client=trace", "api_base_url": "https://staging.example.org/api"}"#,
        )
        .expect("write");

        let mut config = ClientConfig::default();
        config
            .apply_file(path.to_str().expect("utf8 path"))
            .expect("apply");
        assert_eq!(config.log_filter, "lms_client=trace");
        assert_eq!(config.api_base_url, "https://staging.example.org/api");
        assert_eq!(config.credentials_path, PathBuf::from(DEFAULT_CREDENTIALS_PATH));
    }

    #[test]
    fn bad_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("client.json");
        std::fs::write(&path, "{ nope").expect("write");

        let mut config = ClientConfig::default();
        let err = config
            .apply_file(path.to_str().expect("utf8 path"))
            .expect_err("parse error");
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = config
            .apply_file("/definitely/missing/client.json")
            .expect_err("read error");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
