//! Custom Test Assertions
//!
//! Assertion helpers for roster changes that give more meaningful failure
//! messages than comparing whole rosters.

use core_kernel::{Amount, FriendId};
use domain_ledger::FriendRoster;

/// Asserts that `after` differs from `before` only in one friend's balance
///
/// # Arguments
///
/// * `before` - Roster before the operation
/// * `after` - Roster after the operation
/// * `target` - The friend expected to change
/// * `delta` - The expected balance change for `target`
///
/// # Panics
///
/// Panics if the rosters differ in length or order, if the target's balance
/// changed by anything other than `delta`, or if any other friend changed.
pub fn assert_only_balance_changed(
    before: &FriendRoster,
    after: &FriendRoster,
    target: &FriendId,
    delta: Amount,
) {
    assert_eq!(
        before.len(),
        after.len(),
        "Roster length changed: before={}, after={}",
        before.len(),
        after.len()
    );

    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(old.id(), new.id(), "Roster order changed at {}", old.name());

        if &old.id() == target {
            assert_eq!(
                new.balance(),
                old.balance() + delta,
                "{} balance: expected {} + {}, got {}",
                old.name(),
                old.balance(),
                delta,
                new.balance()
            );
            assert_eq!(old.name(), new.name());
            assert_eq!(old.image(), new.image());
        } else {
            assert_eq!(old, new, "Untargeted friend {} changed", old.name());
        }
    }
}

/// Asserts a friend's balance
pub fn assert_balance(roster: &FriendRoster, friend_id: &FriendId, expected: impl Into<Amount>) {
    let expected = expected.into();
    let friend = roster
        .get(friend_id)
        .unwrap_or_else(|| panic!("Friend {friend_id} not on roster"));
    assert_eq!(
        friend.balance(),
        expected,
        "{} balance: expected {}, got {}",
        friend.name(),
        expected,
        friend.balance()
    );
}

/// Asserts that two rosters hold the same friends with the same balances
pub fn assert_rosters_equal(actual: &FriendRoster, expected: &FriendRoster) {
    let actual_list: Vec<_> = actual.iter().map(|f| (f.id(), f.balance())).collect();
    let expected_list: Vec<_> = expected.iter().map(|f| (f.id(), f.balance())).collect();
    assert_eq!(actual_list, expected_list, "Rosters differ");
}
