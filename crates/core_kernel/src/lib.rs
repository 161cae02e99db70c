//! Core Kernel - Foundational types for the expense splitter
//!
//! This crate provides the building blocks shared by the ledger and the
//! session layer:
//! - `Amount`, a signed decimal value used for balances, bills and deltas
//! - Strongly-typed identifiers
//! - The `IdGenerator` port used to mint identifiers for new friends

pub mod amount;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use amount::{Amount, AmountError};
pub use identifiers::{FriendId, EventId};
pub use ports::{IdGenerator, RandomIdGenerator};
pub use error::CoreError;
