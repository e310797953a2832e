//! Configuration loader. Secrets are read from a JSON file through the
//! `SecretText` decoding hook, so plaintext values are wrapped the moment they
//! leave the parser and every secret shares the configured equality policy.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::secret::{EqualityPolicy, SecretText};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file unreadable: {0}")]
    Io(String),
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct RawConcealConfig {
    #[serde(default)]
    equality: EqualityPolicy,
    #[serde(default)]
    secrets: BTreeMap<String, SecretText>,
}

/// Runtime configuration. Serializing it (or printing it with `{:?}`) shows
/// secret names but never their values.
#[derive(Debug, Default, Serialize)]
pub struct ConcealConfig {
    pub equality: EqualityPolicy,
    pub secrets: BTreeMap<String, SecretText>,
}

impl ConcealConfig {
    /// Parses a JSON document and applies the equality policy to every secret.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawConcealConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(format!("{e}")))?;
        let equality = raw.equality;
        let secrets = raw
            .secrets
            .into_iter()
            .map(|(name, secret)| (name, secret.with_policy(equality)))
            .collect();
        Ok(Self { equality, secrets })
    }

    pub fn secret(&self, name: &str) -> Option<&SecretText> {
        self.secrets.get(name)
    }
}

/// Loads the JSON configuration file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConcealConfig, ConfigError> {
    let path = path.as_ref();
    let raw_json = fs::read_to_string(path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    let config = ConcealConfig::from_json(&raw_json)?;
    tracing::debug!(
        path = %path.display(),
        secrets = config.secrets.len(),
        equality = %config.equality,
        "loaded configuration"
    );
    Ok(config)
}
