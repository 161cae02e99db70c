//! Application state container

use serde::{Deserialize, Serialize};

use domain_ledger::{seed, Friend, FriendRoster, Selection};

/// Form visibility flags
///
/// The split-bill form has no flag of its own: it is shown exactly when a
/// friend is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFlags {
    pub show_add_friend: bool,
}

/// Everything the presentation layer renders from
///
/// A state value is never edited after construction; intents produce a new
/// one through `reduce`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub roster: FriendRoster,
    pub selection: Selection,
    pub forms: FormFlags,
}

impl AppState {
    /// Creates a state with the given roster, nothing selected and all forms closed
    pub fn new(roster: FriendRoster) -> Self {
        Self {
            roster,
            selection: Selection::None,
            forms: FormFlags::default(),
        }
    }

    /// Creates the initial state from the seed roster
    pub fn seeded() -> Self {
        Self::new(seed::initial_roster())
    }

    /// Resolves the selection against the roster
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection
            .friend_id()
            .and_then(|id| self.roster.get(&id))
    }

    pub fn is_add_friend_form_visible(&self) -> bool {
        self.forms.show_add_friend
    }

    pub fn is_split_form_visible(&self) -> bool {
        self.selected_friend().is_some()
    }
}
