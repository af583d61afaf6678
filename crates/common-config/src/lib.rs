//! Shared configuration helpers for TrustSec client components.

use std::{env, fmt::Display, fs, path::Path, str::FromStr};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for configuration related failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration that can be loaded from a TOML file and then refined through
/// environment variables sharing a common prefix.
pub trait ServiceConfig: DeserializeOwned + Default {
    /// Prefix of every environment variable consulted by this config, e.g. `TRUSTSEC_`.
    const PREFIX: &'static str;

    fn apply_environment_overrides(&mut self, prefix: &str);

    /// Defaults with environment overrides applied.
    fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_environment_overrides(Self::PREFIX);
        config
    }

    /// Load the configuration from a TOML file on disk, then apply environment overrides.
    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(contents)?;
        config.apply_environment_overrides(Self::PREFIX);
        Ok(config)
    }
}

/// Read `{prefix}{key}` from the environment.
pub fn env_string(prefix: &str, key: &str) -> Option<String> {
    env::var(format!("{prefix}{key}")).ok()
}

/// Read and parse `{prefix}{key}` from the environment.
///
/// Returns `None` when the variable is missing or cannot be parsed; the latter
/// is logged so a typo in an override does not go unnoticed.
pub fn env_parse<T>(prefix: &str, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let var = format!("{prefix}{key}");
    let value = env::var(&var).ok()?;
    value
        .trim()
        .parse::<T>()
        .inspect_err(|error| {
            tracing::warn!(%var, %value, %error, "invalid override, using configured value");
        })
        .ok()
}
