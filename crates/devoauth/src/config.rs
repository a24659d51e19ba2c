use std::{env, path::PathBuf};

use devoauth_core::oidc::parse_groups;
use thiserror::Error;

use crate::keys::KeySource;

pub const GROUPS_VAR: &str = "DEVOAUTH2_GROUPS";
pub const PRIVATE_KEY_VAR: &str = "DEVOAUTH2_PRIVATE_KEY";
pub const JWKS_VAR: &str = "DEVOAUTH2_JWKS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DEVOAUTH2_JWKS is set but DEVOAUTH2_PRIVATE_KEY is not")]
    JwksWithoutPrivateKey,
}

/// Startup configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Groups the demo user belongs to.
    pub groups: Vec<String>,
    /// Where the signing key comes from.
    pub key_source: KeySource,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DEVOAUTH2_GROUPS` - Comma-separated groups for the demo user (default: none)
    /// - `DEVOAUTH2_PRIVATE_KEY` - Path to a private RSA key, as JWK or PEM (default: bundled key)
    /// - `DEVOAUTH2_JWKS` - Path to the JWKS to publish (default: derived from the private key)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let groups = parse_groups(lookup(GROUPS_VAR).as_deref());

        let key_source = match (lookup(PRIVATE_KEY_VAR), lookup(JWKS_VAR)) {
            (Some(private_key), jwks) => KeySource::Files {
                private_key: PathBuf::from(private_key),
                jwks: jwks.map(PathBuf::from),
            },
            (None, Some(_)) => return Err(ConfigError::JwksWithoutPrivateKey),
            (None, None) => KeySource::Bundled,
        };

        Ok(Self { groups, key_source })
    }
}
