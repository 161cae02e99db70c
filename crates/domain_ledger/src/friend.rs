//! Friend records and their balance read model

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, CoreError, FriendId};

/// A friend the user splits expenses with
///
/// The balance is only changed through `FriendRoster::apply_delta`; this
/// type exposes no public setter for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    id: FriendId,
    name: String,
    image: String,
    balance: Amount,
}

impl Friend {
    /// Creates a settled friend (zero balance)
    ///
    /// # Arguments
    ///
    /// * `id` - Stable identifier
    /// * `name` - Display name
    /// * `image` - Avatar URL
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: Amount::zero(),
        }
    }

    /// Sets the opening balance
    pub fn with_balance(mut self, balance: Amount) -> Self {
        self.balance = balance;
        self
    }

    pub fn id(&self) -> FriendId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Returns a copy with `delta` added to the balance
    pub(crate) fn adjusted_by(&self, delta: Amount) -> Result<Self, CoreError> {
        let balance = self.balance.checked_add(&delta)?;
        Ok(Self {
            balance,
            ..self.clone()
        })
    }

    /// Classifies the balance by direction
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human-readable balance line, e.g. "You owe Clark 7€"
    pub fn balance_summary(&self) -> String {
        match self.status() {
            BalanceStatus::YouOwe(amount) => format!("You owe {} {}€", self.name, amount),
            BalanceStatus::OwesYou(amount) => format!("{} owes you {}€", self.name, amount),
            BalanceStatus::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Direction of a friend's balance, carrying the unsigned magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceStatus {
    /// The user owes the friend this much
    YouOwe(Amount),
    /// The friend owes the user this much
    OwesYou(Amount),
    /// Settled
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: Amount) -> Self {
        if balance.is_negative() {
            BalanceStatus::YouOwe(balance.abs())
        } else if balance.is_positive() {
            BalanceStatus::OwesYou(balance)
        } else {
            BalanceStatus::Even
        }
    }

    /// Display tone for the presentation layer
    pub fn tone(&self) -> BalanceTone {
        match self {
            BalanceStatus::YouOwe(_) => BalanceTone::Red,
            BalanceStatus::OwesYou(_) => BalanceTone::Green,
            BalanceStatus::Even => BalanceTone::Grey,
        }
    }
}

/// Colour hint for rendering a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTone {
    Red,
    Green,
    Grey,
}
