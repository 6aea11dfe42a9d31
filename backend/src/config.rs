//! Server configuration read from the environment.
//!
//! `main` loads an optional `.env` file first, so every variable below can
//! also be set there.
//!
//! | Variable                        | Default                 |
//! |---------------------------------|-------------------------|
//! | `BACKEND_API_URL` / `BACKEND_URL` | `http://localhost:8000` |
//! | `DOCGEN_HOST`                   | `127.0.0.1`             |
//! | `DOCGEN_PORT`                   | `8080`                  |
//! | `DOCGEN_OPEN_BROWSER`           | `true`                  |
//! | `DOCGEN_UPSTREAM_TIMEOUT_SECS`  | `30`                    |

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the document service, without a trailing `/`.
    pub backend_url: String,
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let backend_url = var("BACKEND_API_URL")
            .or_else(|| var("BACKEND_URL"))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let host = var("DOCGEN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("DOCGEN_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "DOCGEN_PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let open_browser = match var("DOCGEN_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "DOCGEN_OPEN_BROWSER",
                expected: "true or false",
                value: raw,
            })?,
            None => true,
        };

        let timeout_secs = match var("DOCGEN_UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "DOCGEN_UPSTREAM_TIMEOUT_SECS",
                expected: "a number of seconds",
                value: raw,
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            backend_url,
            host,
            port,
            open_browser,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Address the UI is served on.
    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.open_browser);
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
        assert_eq!(config.public_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn backend_url_prefers_api_variable_and_trims_slash() {
        let config = config(&[
            ("BACKEND_API_URL", "https://docs.example.com/"),
            ("BACKEND_URL", "http://ignored"),
        ])
        .unwrap();
        assert_eq!(config.backend_url, "https://docs.example.com");
    }

    #[test]
    fn backend_url_falls_back_to_legacy_variable() {
        let config = config(&[("BACKEND_API_URL", "  "), ("BACKEND_URL", "http://svc:9000")]).unwrap();
        assert_eq!(config.backend_url, "http://svc:9000");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config(&[("DOCGEN_PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "DOCGEN_PORT",
                expected: "a port number",
                value: "eighty".to_string(),
            }
        );
    }

    #[test]
    fn browser_flag_accepts_common_spellings() {
        assert!(!config(&[("DOCGEN_OPEN_BROWSER", "off")]).unwrap().open_browser);
        assert!(config(&[("DOCGEN_OPEN_BROWSER", "YES")]).unwrap().open_browser);
        assert!(config(&[("DOCGEN_OPEN_BROWSER", "maybe")]).is_err());
    }

    #[test]
    fn timeout_is_read_in_seconds() {
        let config = config(&[("DOCGEN_UPSTREAM_TIMEOUT_SECS", "5")]).unwrap();
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }
}
