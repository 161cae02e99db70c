//! The friend roster (balance ledger)
//!
//! This module owns the canonical, insertion-ordered list of friends and is
//! the only place a balance can change.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use core_kernel::{Amount, FriendId};
use crate::error::LedgerError;
use crate::friend::Friend;

/// Ordered list of friends with unique identifiers
///
/// Entries are shared behind `Arc`, so producing the next roster version
/// copies pointers rather than friends. An entry that an operation did not
/// target is the very same allocation in the old and new roster, which lets
/// a renderer skip it with a pointer comparison.
///
/// # Invariants
///
/// - Identifiers are unique
/// - Insertion order is preserved; entries are never removed or reordered
/// - Only `add_friend` and `apply_delta` produce a changed roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Friend>", try_from = "Vec<Friend>")]
pub struct FriendRoster {
    friends: Vec<Arc<Friend>>,
}

impl FriendRoster {
    /// Creates an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from friends in order
    ///
    /// # Errors
    ///
    /// Returns `DuplicateFriend` if two friends share an identifier
    pub fn from_friends(friends: impl IntoIterator<Item = Friend>) -> Result<Self, LedgerError> {
        friends
            .into_iter()
            .try_fold(Self::new(), |roster, friend| roster.add_friend(friend))
    }

    /// Returns a roster with `friend` appended
    ///
    /// # Errors
    ///
    /// Returns `DuplicateFriend` if the identifier is already present; the
    /// current roster is left as it was.
    pub fn add_friend(&self, friend: Friend) -> Result<Self, LedgerError> {
        if self.contains(&friend.id()) {
            return Err(LedgerError::DuplicateFriend(friend.id()));
        }

        debug!(friend_id = %friend.id(), name = friend.name(), "Adding friend to roster");

        let mut friends = Vec::with_capacity(self.friends.len() + 1);
        friends.extend(self.friends.iter().cloned());
        friends.push(Arc::new(friend));
        Ok(Self { friends })
    }

    /// Returns a roster where the friend with `friend_id` has `balance += delta`
    ///
    /// Every other entry is carried over untouched.
    ///
    /// # Errors
    ///
    /// - `FriendNotFound` if no friend has this identifier
    /// - `Core` if the new balance overflows
    pub fn apply_delta(&self, friend_id: &FriendId, delta: Amount) -> Result<Self, LedgerError> {
        let index = self
            .position(friend_id)
            .ok_or(LedgerError::FriendNotFound(*friend_id))?;

        let updated = Arc::new(self.friends[index].adjusted_by(delta)?);

        debug!(
            friend_id = %friend_id,
            delta = %delta,
            balance = %updated.balance(),
            "Applied balance delta"
        );

        let mut friends = self.friends.clone();
        friends[index] = updated;
        Ok(Self { friends })
    }

    /// Looks up a friend by identifier
    pub fn get(&self, friend_id: &FriendId) -> Option<&Friend> {
        self.friends
            .iter()
            .find(|f| &f.id() == friend_id)
            .map(Arc::as_ref)
    }

    /// Returns true if a friend with this identifier exists
    pub fn contains(&self, friend_id: &FriendId) -> bool {
        self.position(friend_id).is_some()
    }

    /// Returns the insertion index of a friend
    pub fn position(&self, friend_id: &FriendId) -> Option<usize> {
        self.friends.iter().position(|f| &f.id() == friend_id)
    }

    /// Iterates friends in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Returns true if both rosters hold the identical entry for `friend_id`
    ///
    /// Identical means the same allocation, not merely equal values. Returns
    /// false when either roster lacks the friend.
    pub fn shares_entry(&self, other: &FriendRoster, friend_id: &FriendId) -> bool {
        match (self.position(friend_id), other.position(friend_id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&self.friends[a], &other.friends[b]),
            _ => false,
        }
    }
}

impl From<FriendRoster> for Vec<Friend> {
    fn from(roster: FriendRoster) -> Self {
        roster
            .friends
            .into_iter()
            .map(|f| Arc::try_unwrap(f).unwrap_or_else(|shared| (*shared).clone()))
            .collect()
    }
}

impl TryFrom<Vec<Friend>> for FriendRoster {
    type Error = LedgerError;

    fn try_from(friends: Vec<Friend>) -> Result<Self, Self::Error> {
        Self::from_friends(friends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(id: u128, name: &str, balance: i64) -> Friend {
        Friend::new(FriendId::from_u128(id), name, format!("https://i.pravatar.cc/48?u={id}"))
            .with_balance(Amount::from(balance))
    }

    fn setup_roster() -> FriendRoster {
        FriendRoster::from_friends([
            friend(1, "Clark", -7),
            friend(2, "Sarah", 20),
            friend(3, "Anthony", 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_friend_appends_in_order() {
        let roster = setup_roster();
        let next = roster.add_friend(friend(4, "Dana", 0)).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(next.len(), 4);
        let names: Vec<_> = next.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony", "Dana"]);
    }

    #[test]
    fn test_add_duplicate_is_rejected() {
        let roster = setup_roster();
        let result = roster.add_friend(friend(2, "Sarah again", 0));

        assert!(matches!(result, Err(LedgerError::DuplicateFriend(id)) if id == FriendId::from_u128(2)));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_apply_delta_targets_only_one_friend() {
        let roster = setup_roster();
        let sarah = FriendId::from_u128(2);
        let next = roster.apply_delta(&sarah, Amount::from(70)).unwrap();

        assert_eq!(next.get(&sarah).unwrap().balance(), Amount::from(90));
        assert_eq!(roster.get(&sarah).unwrap().balance(), Amount::from(20));
        assert!(next.shares_entry(&roster, &FriendId::from_u128(1)));
        assert!(next.shares_entry(&roster, &FriendId::from_u128(3)));
        assert!(!next.shares_entry(&roster, &sarah));
    }

    #[test]
    fn test_apply_delta_unknown_friend() {
        let roster = setup_roster();
        let missing = FriendId::from_u128(99);

        let result = roster.apply_delta(&missing, Amount::from(5));
        assert!(matches!(result, Err(LedgerError::FriendNotFound(id)) if id == missing));
    }

    #[test]
    fn test_from_friends_rejects_duplicates() {
        let result = FriendRoster::from_friends([friend(1, "A", 0), friend(1, "B", 0)]);
        assert!(matches!(result, Err(LedgerError::DuplicateFriend(_))));
    }

    #[test]
    fn test_serde_roundtrip_as_plain_list() {
        let roster = setup_roster();
        let json = serde_json::to_value(&roster).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 3);

        let back: FriendRoster = serde_json::from_value(json).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let list = vec![friend(1, "A", 0), friend(1, "B", 0)];
        let json = serde_json::to_string(&list).unwrap();
        assert!(serde_json::from_str::<FriendRoster>(&json).is_err());
    }
}
