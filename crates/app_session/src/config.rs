//! Session configuration

use serde::Deserialize;

use core_kernel::CoreError;
use domain_ledger::seed;

use crate::error::SessionError;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial value of the add-friend image field
    pub default_avatar_template: String,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Start with the fixed seed roster instead of an empty one
    pub seed_roster: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_avatar_template: seed::AVATAR_BASE_URL.to_string(),
            log_level: "info".to_string(),
            log_json: false,
            seed_roster: true,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from `SPLIT_*` environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, SessionError> {
        dotenvy::dotenv().ok();
        Self::load(config::Environment::with_prefix("SPLIT"))
    }

    /// Loads configuration from an environment source
    pub fn load(environment: config::Environment) -> Result<Self, SessionError> {
        let loaded: SessionConfig = config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.default_avatar_template.trim().is_empty() {
            return Err(CoreError::configuration("default_avatar_template must not be empty"));
        }
        Ok(())
    }
}
