//! Session errors

use thiserror::Error;

use core_kernel::CoreError;
use domain_ledger::{LedgerError, ValidationError};

/// Errors raised while handling intents or setting up a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A split was submitted while no friend was selected
    #[error("No friend is selected")]
    NoFriendSelected,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Tracing initialization failed: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}

impl SessionError {
    /// Returns the validation failure when the error came from form input
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            SessionError::Ledger(e) => e.as_validation(),
            _ => None,
        }
    }

    /// Returns true if the session may drop the intent and carry on
    pub fn is_recoverable(&self) -> bool {
        self.validation().is_some()
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Ledger(err.into())
    }
}
