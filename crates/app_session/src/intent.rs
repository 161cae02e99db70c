//! User intents emitted by the presentation layer

use serde::{Deserialize, Serialize};

use core_kernel::{Amount, FriendId};
use domain_ledger::Payer;

/// A discrete user action
///
/// Intents are applied one at a time, in the order they were issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Select a friend, or deselect if already selected
    SelectFriend { friend_id: FriendId },
    OpenAddFriendForm,
    CloseAddFriendForm,
    /// The "Add Friend" / "Close" button
    ToggleAddFriendForm,
    SubmitAddFriend { name: String, image: String },
    /// Absent form fields arrive as zero
    SubmitSplitBill {
        bill: Amount,
        paid_by_user: Amount,
        payer: Payer,
    },
}

impl Intent {
    pub fn select(friend_id: FriendId) -> Self {
        Intent::SelectFriend { friend_id }
    }

    pub fn add_friend(name: impl Into<String>, image: impl Into<String>) -> Self {
        Intent::SubmitAddFriend {
            name: name.into(),
            image: image.into(),
        }
    }

    pub fn split_bill(bill: impl Into<Amount>, paid_by_user: impl Into<Amount>, payer: Payer) -> Self {
        Intent::SubmitSplitBill {
            bill: bill.into(),
            paid_by_user: paid_by_user.into(),
            payer,
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::SelectFriend { .. } => "select_friend",
            Intent::OpenAddFriendForm => "open_add_friend_form",
            Intent::CloseAddFriendForm => "close_add_friend_form",
            Intent::ToggleAddFriendForm => "toggle_add_friend_form",
            Intent::SubmitAddFriend { .. } => "submit_add_friend",
            Intent::SubmitSplitBill { .. } => "submit_split_bill",
        }
    }
}
