//! Configuration management for profilekit.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use std::env::{self, VarError};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Environment variable overriding the typed id separator.
pub const TYPED_ID_SEPARATOR_VAR: &str = "PK_TYPED_ID_SEPARATOR";

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Main configuration structure for profilekit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Profile configuration.
    pub profile: ProfileConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Profile configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Separator placed between the profile type and the id in a typed id.
    pub typed_id_separator: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive (e.g. `info,pk_profile=debug`).
    pub filter: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            typed_id_separator: "#".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable is not valid UTF-8 or holds
    /// an unusable value.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::try_from_lookup(env_var)
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a variable holds an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::try_from_lookup(|key| Ok(lookup(key)))
    }

    /// Builds configuration from a lookup that may fail to read a variable.
    ///
    /// # Errors
    ///
    /// Returns the lookup's error, or [`Error::Config`] if a variable holds
    /// an unusable value.
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let defaults = Self::default();

        let typed_id_separator = lookup(TYPED_ID_SEPARATOR_VAR)?
            .unwrap_or(defaults.profile.typed_id_separator);

        let filter = lookup(LOG_FILTER_VAR)?.unwrap_or(defaults.logging.filter);

        let config = Self {
            profile: ProfileConfig { typed_id_separator },
            logging: LoggingConfig { filter },
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values no profile can work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.profile.typed_id_separator.is_empty() {
            return Err(Error::config(format!(
                "{TYPED_ID_SEPARATOR_VAR} must not be empty"
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(Error::config(format!("{LOG_FILTER_VAR} must not be blank")));
        }
        EnvFilter::try_new(&self.logging.filter).map_err(|e| {
            Error::config(format!(
                "{LOG_FILTER_VAR} {:?} is not a valid filter: {e}",
                self.logging.filter
            ))
        })?;
        Ok(())
    }
}

/// Reads an environment variable, treating only an unset one as absent.
fn env_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::config(format!("{key} is not valid UTF-8"))),
    }
}
