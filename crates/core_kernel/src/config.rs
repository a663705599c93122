//! Domain configuration
//!
//! Settings that change how builders behave, loaded through the `config`
//! crate. Everything has a default, so an empty source is valid.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Environment prefix for `DomainConfig::from_env`
pub const ENV_PREFIX: &str = "GATEWAY_DOMAIN";

/// What a document dispatch does to the mutually exclusive sibling field
///
/// With `LeaveStale`, setting a CPF after a CNPJ (or the reverse) keeps the
/// earlier value, so both may reach the built sender. With `ClearSibling`,
/// the sibling is reset and the built sender carries one document at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSwitch {
    #[default]
    LeaveStale,
    ClearSibling,
}

/// Builder behaviour settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// Sibling handling for `with_document`
    pub document_switch: DocumentSwitch,
}

impl DomainConfig {
    /// Loads configuration from `GATEWAY_DOMAIN_*` environment variables
    ///
    /// e.g. `GATEWAY_DOMAIN_DOCUMENT_SWITCH=clear_sibling`
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from any `config` source (file, string, env)
    pub fn from_source<S>(source: S) -> Result<Self, CoreError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let loaded = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize::<DomainConfig>()?;

        tracing::debug!(document_switch = ?loaded.document_switch, "domain configuration loaded");
        Ok(loaded)
    }
}
