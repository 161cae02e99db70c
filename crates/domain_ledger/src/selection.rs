//! Friend selection state machine
//!
//! ```text
//!            select(f)                 select(g), g != f
//!   NONE ─────────────▶ SELECTED(f) ─────────────────────▶ SELECTED(g)
//!    ▲                      │
//!    └──────────────────────┘
//!       select(f) or clear()
//! ```
//!
//! There is no terminal state; the selection lives for the whole session.

use serde::{Deserialize, Serialize};

use core_kernel::FriendId;

/// At most one focused friend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "friend_id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Selection {
    #[default]
    None,
    Selected(FriendId),
}

/// Result of a select intent
///
/// Selecting always asks the presentation layer to hide the add-friend form,
/// whether the friend was focused or toggled off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub selection: Selection,
    pub close_add_friend_form: bool,
}

impl Selection {
    /// Selects `friend_id`, or toggles it off if it is already selected
    pub fn select(self, friend_id: FriendId) -> SelectionChange {
        let selection = match self {
            Selection::Selected(current) if current == friend_id => Selection::None,
            _ => Selection::Selected(friend_id),
        };

        SelectionChange {
            selection,
            close_add_friend_form: true,
        }
    }

    /// Unconditionally empties the selection
    pub fn clear(self) -> Selection {
        Selection::None
    }

    pub fn friend_id(&self) -> Option<FriendId> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(*id),
        }
    }

    pub fn is_selected(&self, friend_id: &FriendId) -> bool {
        self.friend_id().as_ref() == Some(friend_id)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}
