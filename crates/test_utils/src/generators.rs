//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Amount, FriendId};
use domain_ledger::{BillSplit, Friend, FriendRoster, Payer};
use proptest::prelude::*;

/// Strategy for balances between -10,000.00 and 10,000.00
pub fn balance_strategy() -> impl Strategy<Value = Amount> {
    (-1_000_000i64..1_000_000i64).prop_map(Amount::from_minor)
}

/// Strategy for strictly positive amounts up to 10,000.00
pub fn positive_amount_strategy() -> impl Strategy<Value = Amount> {
    (1i64..1_000_000i64).prop_map(Amount::from_minor)
}

/// Strategy for payer designations
pub fn payer_strategy() -> impl Strategy<Value = Payer> {
    prop_oneof![Just(Payer::User), Just(Payer::Friend)]
}

/// Strategy for complete splits with `0 < paid <= bill`
pub fn bill_split_strategy() -> impl Strategy<Value = BillSplit> {
    (1i64..1_000_000i64)
        .prop_flat_map(|bill| (Just(bill), 1i64..=bill, payer_strategy()))
        .prop_map(|(bill, paid, payer)| {
            BillSplit::new(Amount::from_minor(bill), Amount::from_minor(paid), payer)
        })
}

/// Strategy for names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}"
}

/// Strategy for rosters of 1 to `max` friends with distinct ids
pub fn roster_strategy(max: usize) -> impl Strategy<Value = FriendRoster> {
    proptest::collection::vec((name_strategy(), balance_strategy()), 1..=max).prop_map(|entries| {
        let friends = entries.into_iter().enumerate().map(|(i, (name, balance))| {
            Friend::new(FriendId::from_u128(i as u128 + 1), name, "https://i.pravatar.cc/48")
                .with_balance(balance)
        });
        FriendRoster::from_friends(friends).expect("indices are distinct")
    })
}
