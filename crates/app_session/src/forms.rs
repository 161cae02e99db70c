//! Input drafts for the two forms
//!
//! These model what the user has typed so far. They belong to the input
//! layer: they keep the user's expense within the bill as it is typed, and
//! turn the finished form into an `Intent`.

use core_kernel::Amount;
use domain_ledger::Payer;

use crate::config::SessionConfig;
use crate::intent::Intent;

/// Parses a text field into an amount
///
/// Empty or unparsable text counts as "not entered yet".
pub fn parse_amount(text: &str) -> Option<Amount> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Add-friend form contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendDraft {
    name: String,
    image: String,
    default_image: String,
}

impl Default for AddFriendDraft {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl AddFriendDraft {
    /// Creates an empty draft whose image field starts at `default_image`
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    /// Creates an empty draft seeded with the configured avatar template
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.default_avatar_template.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    /// Restores the empty name and default image
    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
    }

    pub fn to_intent(&self) -> Intent {
        Intent::add_friend(self.name.clone(), self.image.clone())
    }
}

/// Split-bill form contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitBillDraft {
    bill: Option<Amount>,
    paid_by_user: Option<Amount>,
    payer: Payer,
}

impl SplitBillDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(&self) -> Option<Amount> {
        self.bill
    }

    pub fn paid_by_user(&self) -> Option<Amount> {
        self.paid_by_user
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Sets the bill total
    ///
    /// An already-entered expense is left as is, even if it now exceeds the
    /// bill; submission rejects that combination.
    pub fn set_bill(&mut self, bill: Option<Amount>) {
        self.bill = bill;
    }

    /// Sets the user's expense unless it falls outside `0..=bill`
    ///
    /// A rejected value keeps the previous entry. With no bill entered, only
    /// zero or an empty field is accepted. Returns whether the value was
    /// taken.
    pub fn set_paid_by_user(&mut self, paid: Option<Amount>) -> bool {
        let limit = self.bill.unwrap_or_default();
        match paid {
            Some(value) if value.is_negative() || value > limit => false,
            _ => {
                self.paid_by_user = paid;
                true
            }
        }
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// The friend's part, shown read-only once a bill is entered
    ///
    /// `None` until a bill is entered, or when the difference is out of range.
    pub fn friend_expense(&self) -> Option<Amount> {
        let paid = self.paid_by_user.unwrap_or_default();
        self.bill.and_then(|bill| bill.checked_sub(&paid).ok())
    }

    /// Missing fields are submitted as zero
    pub fn to_intent(&self) -> Intent {
        Intent::split_bill(
            self.bill.unwrap_or_default(),
            self.paid_by_user.unwrap_or_default(),
            self.payer,
        )
    }
}
