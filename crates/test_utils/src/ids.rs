//! Deterministic identifier generation

use std::cell::Cell;

use core_kernel::{FriendId, IdGenerator};

/// Yields `FriendId::from_u128(start)`, `start + 1`, ...
///
/// Not thread-safe; sessions are single-threaded.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    start: u128,
    next: Cell<u128>,
}

impl SequentialIdGenerator {
    /// Starts well above the seed identifiers so the two never collide
    pub const DEFAULT_START: u128 = 1_000_000;

    pub fn new() -> Self {
        Self::starting_at(Self::DEFAULT_START)
    }

    pub fn starting_at(start: u128) -> Self {
        Self {
            start,
            next: Cell::new(start),
        }
    }

    /// The identifier the next call will return
    pub fn peek(&self) -> FriendId {
        FriendId::from_u128(self.next.get())
    }

    /// Number of identifiers handed out so far
    pub fn issued(&self) -> u128 {
        self.next.get() - self.start
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_friend_id(&self) -> FriendId {
        let current = self.next.get();
        self.next.set(current + 1);
        FriendId::from_u128(current)
    }
}
