//! Performer configuration
//!
//! Defaults match the host runtime's expectations; each field can be
//! overridden through the environment.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Version tag embedded in every task result
pub const VERIFIER_VERSION: &str = "1.0.0";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformerConfig {
    /// TCP port the task endpoints listen on
    pub port: u16,
    /// Upper bound on a single request, verification included
    pub request_timeout: Duration,
    /// Largest accepted task payload
    pub max_payload_bytes: usize,
    pub verifier_version: String,
}

impl Default for PerformerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            request_timeout: Duration::from_secs(5),
            max_payload_bytes: 16 * 1024 * 1024,
            verifier_version: VERIFIER_VERSION.to_string(),
        }
    }
}

impl PerformerConfig {
    /// Defaults overridden by `PERFORMER_PORT`, `PERFORMER_TIMEOUT_SECS`
    /// and `PERFORMER_MAX_PAYLOAD_BYTES`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = lookup("PERFORMER_PORT") {
            config.port = parse_var("PERFORMER_PORT", port)?;
        }
        if let Some(secs) = lookup("PERFORMER_TIMEOUT_SECS") {
            config.request_timeout =
                Duration::from_secs(parse_var("PERFORMER_TIMEOUT_SECS", secs)?);
        }
        if let Some(bytes) = lookup("PERFORMER_MAX_PAYLOAD_BYTES") {
            config.max_payload_bytes = parse_var("PERFORMER_MAX_PAYLOAD_BYTES", bytes)?;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}
