//! Ledger Domain - Friends and Shared-Expense Balances
//!
//! This crate holds the in-memory model for tracking who owes whom between
//! the user and a small set of friends.
//!
//! # Balance Sign Convention
//!
//! Every friend carries one signed balance:
//! - Negative: the user owes the friend
//! - Positive: the friend owes the user
//! - Zero: settled
//!
//! # Components
//!
//! - **FriendRoster**: the ordered friend list; the only place balances change
//! - **Selection**: which single friend, if any, is focused for a split
//! - **AddFriendWorkflow**: validates form input and mints a new `Friend`
//! - **SplitBillWorkflow**: collapses a bill split into one signed delta
//!
//! All operations are value-in, value-out. A roster or selection is never
//! mutated in place; each operation returns the next version.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{FriendRoster, Payer, SplitBillWorkflow, seed};
//!
//! let roster = seed::initial_roster();
//! let sarah = roster.iter().nth(1).unwrap().id();
//!
//! let delta = SplitBillWorkflow::compute_delta(bill, paid_by_user, Payer::User)?;
//! let roster = roster.apply_delta(&sarah, delta)?;
//! ```

pub mod friend;
pub mod roster;
pub mod selection;
pub mod add_friend;
pub mod split_bill;
pub mod seed;
pub mod error;

pub use friend::{Friend, BalanceStatus, BalanceTone};
pub use roster::FriendRoster;
pub use selection::{Selection, SelectionChange};
pub use add_friend::{AddFriendWorkflow, NewFriendRequest};
pub use split_bill::{BillSplit, Payer, SplitBillWorkflow};
pub use error::{LedgerError, ValidationError};
