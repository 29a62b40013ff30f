//! Module: config
//! Responsibility: TOML-backed defaults for the algebra's tunable edges.
//! Does not own: backend connection or dialect settings.


use crate::like::{DEFAULT_ESCAPE, DEFAULT_WILDCARDS, LikeEscaper};
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("like escape character '{escape}' is also listed as a wildcard")]
    EscapeIsWildcard { escape: char },

    #[error("like wildcard set must include '{wildcard}'")]
    MissingWildcard { wildcard: char },
}

///
/// QueryConfig
///
/// Root of the configuration file. Every section is optional.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    pub like: LikeConfig,
}

impl QueryConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

///
/// LikeConfig
///
/// `wildcards` lists every metacharacter the backend interprets. It must
/// keep `%` and `_`, which the reference matcher always treats as wildcards.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LikeConfig {
    pub escape: char,
    pub wildcards: Vec<char>,
}

impl LikeConfig {
    /// Validate the section and build an escaper from it.
    pub fn escaper(&self) -> Result<LikeEscaper, ConfigError> {
        if let Some(&wildcard) = DEFAULT_WILDCARDS
            .iter()
            .find(|wildcard| !self.wildcards.contains(wildcard))
        {
            return Err(ConfigError::MissingWildcard { wildcard });
        }
        if self.wildcards.contains(&self.escape) {
            return Err(ConfigError::EscapeIsWildcard {
                escape: self.escape,
            });
        }

        Ok(LikeEscaper::with_wildcards(
            self.escape,
            self.wildcards.clone(),
        ))
    }
}

impl Default for LikeConfig {
    fn default() -> Self {
        Self {
            escape: DEFAULT_ESCAPE,
            wildcards: DEFAULT_WILDCARDS.to_vec(),
        }
    }
}
