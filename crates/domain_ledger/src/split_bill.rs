//! Split-bill workflow
//!
//! A bill split is ephemeral: it exists while the form is filled in and
//! collapses to a single signed delta for the selected friend.
//!
//! # Delta Rules
//!
//! With `bill` the total and `paid` the user's own expense, the friend's
//! share is `bill - paid`.
//!
//! | Payer  | Delta applied to the friend |
//! |--------|-----------------------------|
//! | User   | `+(bill - paid)`            |
//! | Friend | `-paid`                     |

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Amount, AmountError};
use crate::error::{LedgerError, ValidationError};

/// Which party paid the bill upfront
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

/// A completed split-bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSplit {
    pub bill: Amount,
    pub paid_by_user: Amount,
    pub payer: Payer,
}

impl BillSplit {
    pub fn new(bill: Amount, paid_by_user: Amount, payer: Payer) -> Self {
        Self {
            bill,
            paid_by_user,
            payer,
        }
    }

    /// The friend's part of the bill
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the difference is out of range.
    pub fn friend_share(&self) -> Result<Amount, AmountError> {
        self.bill.checked_sub(&self.paid_by_user)
    }

    /// Validates the split and returns the friend's balance delta
    pub fn delta(&self) -> Result<Amount, LedgerError> {
        SplitBillWorkflow::compute_delta(self.bill, self.paid_by_user, self.payer)
    }
}

/// Stateless delta computation for bill splits
pub struct SplitBillWorkflow;

impl SplitBillWorkflow {
    /// Computes the signed delta for the selected friend's balance
    ///
    /// # Arguments
    ///
    /// * `bill` - Bill total
    /// * `paid_by_user` - The user's own expense, `0 <= paid_by_user <= bill`
    /// * `payer` - Who paid the bill upfront
    ///
    /// # Errors
    ///
    /// - `MissingBill` / `MissingPaidByUser` when either amount is zero,
    ///   which is how an unfilled form field arrives
    /// - `NegativeBill`, `NegativePaidByUser`, `PaidExceedsBill` when the
    ///   input layer failed to keep the amounts in range
    pub fn compute_delta(
        bill: Amount,
        paid_by_user: Amount,
        payer: Payer,
    ) -> Result<Amount, LedgerError> {
        if bill.is_zero() {
            return Err(ValidationError::MissingBill.into());
        }
        if paid_by_user.is_zero() {
            return Err(ValidationError::MissingPaidByUser.into());
        }
        if bill.is_negative() {
            return Err(ValidationError::NegativeBill.into());
        }
        if paid_by_user.is_negative() {
            return Err(ValidationError::NegativePaidByUser.into());
        }
        if paid_by_user > bill {
            return Err(ValidationError::PaidExceedsBill.into());
        }

        let delta = match payer {
            Payer::User => bill.checked_sub(&paid_by_user).map_err(core_kernel::CoreError::from)?,
            Payer::Friend => -paid_by_user,
        };

        debug!(bill = %bill, paid_by_user = %paid_by_user, ?payer, delta = %delta, "Computed split delta");

        Ok(delta)
    }
}
