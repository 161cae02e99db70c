//! Fixed starting roster for a new session

use tracing::error;

use core_kernel::{Amount, FriendId};

use crate::friend::Friend;
use crate::roster::FriendRoster;

/// Seed records: (id, name, opening balance)
const SEED_FRIENDS: [(u128, &str, i64); 3] = [
    (118836, "Clark", -7),
    (933372, "Sarah", 20),
    (499476, "Anthony", 0),
];

/// Avatar service used by the seed records and the add-friend form default
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";

/// Returns the seed friends in roster order
pub fn initial_friends() -> Vec<Friend> {
    SEED_FRIENDS
        .iter()
        .map(|&(id, name, balance)| {
            Friend::new(FriendId::from_u128(id), name, format!("{AVATAR_BASE_URL}?u={id}"))
                .with_balance(Amount::from(balance))
        })
        .collect()
}

/// Returns the seed roster
///
/// `SEED_FRIENDS` must hold distinct identifiers. A duplicate is a
/// programming error: debug builds panic, release builds log it and start
/// with an empty roster.
pub fn initial_roster() -> FriendRoster {
    FriendRoster::from_friends(initial_friends()).unwrap_or_else(|err| {
        error!(error = %err, "Seed roster is invalid");
        debug_assert!(false, "seed roster is invalid: {err}");
        FriendRoster::new()
    })
}
