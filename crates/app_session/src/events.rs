//! Session events
//!
//! Every accepted intent emits one or more events describing what changed.
//! A renderer can use them to update incrementally; the session also keeps
//! them as an in-memory audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, EventId, FriendId};

/// A recorded state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub id: EventId,
    pub occurred_at: DateTime<Utc>,
    pub kind: SessionEventKind,
}

impl SessionEvent {
    pub fn now(kind: SessionEventKind) -> Self {
        Self {
            id: EventId::new_v7(),
            occurred_at: Utc::now(),
            kind,
        }
    }
}

/// What happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEventKind {
    FriendAdded {
        friend_id: FriendId,
        name: String,
    },
    FriendSelected {
        friend_id: FriendId,
    },
    SelectionCleared,
    BalanceAdjusted {
        friend_id: FriendId,
        delta: Amount,
        new_balance: Amount,
    },
    AddFriendFormOpened,
    AddFriendFormClosed,
}
