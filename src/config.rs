//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment at runtime, so values come from
//! `option_env!` when the bundle is compiled. Unset or unparseable values fall
//! back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TOAST_MILLIS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: expected a positive integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// Upper bound on any single API request.
    pub request_timeout: Duration,
    /// How long a toast stays visible.
    pub toast_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MILLIS),
        }
    }
}

impl ClientConfig {
    /// Build config from build-time environment.
    ///
    /// Optional:
    /// - `VAULT_API_BASE`: default same origin
    /// - `VAULT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `VAULT_TOAST_MILLIS`: default 3000
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("VAULT_API_BASE"),
            option_env!("VAULT_REQUEST_TIMEOUT_SECS"),
            option_env!("VAULT_TOAST_MILLIS"),
        )
    }

    fn from_values(api_base: Option<&str>, timeout_secs: Option<&str>, toast_millis: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base.map_or(defaults.api_base, |raw| raw.trim().trim_end_matches('/').to_owned());
        let request_timeout = parse_positive("VAULT_REQUEST_TIMEOUT_SECS", timeout_secs)
            .map(|secs| secs.map_or(defaults.request_timeout, Duration::from_secs))
            .unwrap_or_else(|e| {
                leptos::logging::warn!("config: {e}; using default");
                defaults.request_timeout
            });
        let toast_duration = parse_positive("VAULT_TOAST_MILLIS", toast_millis)
            .map(|ms| ms.map_or(defaults.toast_duration, Duration::from_millis))
            .unwrap_or_else(|e| {
                leptos::logging::warn!("config: {e}; using default");
                defaults.toast_duration
            });
        Self { api_base, request_timeout, toast_duration }
    }
}

fn parse_positive(key: &'static str, raw: Option<&str>) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidNumber { key, value: raw.to_owned() }),
    }
}
