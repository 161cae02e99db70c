//! Ports for capabilities the domain needs from its environment
//!
//! The ledger never calls a random source directly. Callers inject an
//! `IdGenerator`, so production code can use random UUIDs while tests run
//! against a deterministic sequence.

use std::fmt;

use crate::identifiers::FriendId;

/// Mints identifiers for newly added friends
///
/// Implementations must never return the same identifier twice within a
/// session.
pub trait IdGenerator: fmt::Debug {
    /// Returns a fresh friend identifier
    fn next_friend_id(&self) -> FriendId;
}

/// Generator backed by random (v4) UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_friend_id(&self) -> FriendId {
        FriendId::new()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_friend_id(&self) -> FriendId {
        (**self).next_friend_id()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Box<T> {
    fn next_friend_id(&self) -> FriendId {
        (**self).next_friend_id()
    }
}
