//! Kernel errors

use thiserror::Error;
use crate::amount::AmountError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// A configuration value failed validation after loading
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
