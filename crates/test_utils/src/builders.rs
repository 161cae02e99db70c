//! Test Data Builders
//!
//! Builders let tests specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{Amount, FriendId};
use domain_ledger::{seed, Friend, FriendRoster};

/// Builder for constructing test friends
pub struct FriendBuilder {
    id: FriendId,
    name: String,
    image: Option<String>,
    balance: Amount,
}

impl Default for FriendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendBuilder {
    /// Creates a builder for a settled friend named "Test Friend"
    pub fn new() -> Self {
        Self {
            id: FriendId::new(),
            name: "Test Friend".to_string(),
            image: None,
            balance: Amount::zero(),
        }
    }

    pub fn with_id(mut self, id: FriendId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_balance(mut self, balance: impl Into<Amount>) -> Self {
        self.balance = balance.into();
        self
    }

    /// Builds the friend; the image defaults to the avatar service keyed by id
    pub fn build(self) -> Friend {
        let image = self
            .image
            .unwrap_or_else(|| format!("{}?u={}", seed::AVATAR_BASE_URL, self.id.as_uuid()));
        Friend::new(self.id, self.name, image).with_balance(self.balance)
    }
}

/// Builder for rosters
#[derive(Default)]
pub struct RosterBuilder {
    friends: Vec<Friend>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a friend with a random id
    pub fn friend(mut self, name: &str, balance: impl Into<Amount>) -> Self {
        self.friends.push(
            FriendBuilder::new()
                .with_name(name)
                .with_balance(balance)
                .build(),
        );
        self
    }

    pub fn with(mut self, friend: Friend) -> Self {
        self.friends.push(friend);
        self
    }

    /// # Panics
    ///
    /// Panics if two friends share an id.
    pub fn build(self) -> FriendRoster {
        FriendRoster::from_friends(self.friends).expect("roster builder produced duplicate ids")
    }
}
