//! Pre-built Test Fixtures
//!
//! Ready-to-use data matching the seed roster, so scenario tests can refer to
//! friends by name.

use core_kernel::{Amount, FriendId};
use domain_ledger::{seed, Friend, FriendRoster};
use rust_decimal_macros::dec;

/// Fixture for the seed friends
pub struct FriendFixtures;

impl FriendFixtures {
    /// Clark, whom the user owes 7
    pub fn clark() -> Friend {
        Self::by_name("Clark")
    }

    /// Sarah, who owes the user 20
    pub fn sarah() -> Friend {
        Self::by_name("Sarah")
    }

    /// Anthony, settled
    pub fn anthony() -> Friend {
        Self::by_name("Anthony")
    }

    pub fn clark_id() -> FriendId {
        Self::clark().id()
    }

    pub fn sarah_id() -> FriendId {
        Self::sarah().id()
    }

    pub fn anthony_id() -> FriendId {
        Self::anthony().id()
    }

    /// The seed roster: Clark(-7), Sarah(20), Anthony(0)
    pub fn roster() -> FriendRoster {
        seed::initial_roster()
    }

    fn by_name(name: &str) -> Friend {
        seed::initial_friends()
            .into_iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("no seed friend named {name}"))
    }
}

/// Fixture for amounts used across scenarios
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn bill_100() -> Amount {
        Amount::from(100)
    }

    pub fn paid_30() -> Amount {
        Amount::from(30)
    }

    /// A bill with cents, for rounding checks
    pub fn bill_with_cents() -> Amount {
        Amount::new(dec!(87.35))
    }
}
