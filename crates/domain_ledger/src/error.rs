//! Ledger domain errors

use thiserror::Error;

use core_kernel::{CoreError, FriendId};

/// Incomplete or out-of-range form input
///
/// A validation failure never changes state. The submission is dropped and
/// the form stays open for correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Friend name is required")]
    EmptyName,

    #[error("Image URL is required")]
    EmptyImage,

    #[error("Bill value is required")]
    MissingBill,

    #[error("Your expense is required")]
    MissingPaidByUser,

    #[error("Bill value cannot be negative")]
    NegativeBill,

    #[error("Your expense cannot be negative")]
    NegativePaidByUser,

    #[error("Your expense cannot exceed the bill")]
    PaidExceedsBill,
}

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Form input rejected
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A delta targeted an identifier that is not on the roster
    #[error("Friend not found: {0}")]
    FriendNotFound(FriendId),

    /// A friend with the same identifier is already on the roster
    #[error("Friend already exists: {0}")]
    DuplicateFriend(FriendId),

    /// Arithmetic failure in the kernel
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl LedgerError {
    /// Returns true for user-input failures that are recovered locally
    ///
    /// Everything else indicates the caller's state is out of sync with the
    /// roster and must be surfaced.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }

    /// Returns the validation failure, if this is one
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            LedgerError::Validation(v) => Some(*v),
            _ => None,
        }
    }
}
