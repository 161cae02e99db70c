//! App Session - the single source of truth for one user session
//!
//! The presentation layer reads `AppState` and sends `Intent`s. Every intent
//! is handled by the pure `reduce` function, which either returns the next
//! state together with the events it produced, or an error and no state at
//! all. `Session` wraps `reduce` with the recovery policy:
//!
//! - Validation failures are swallowed: the state is unchanged and the
//!   form that produced the intent stays open
//! - Contract violations (an unknown friend id) are logged and returned
//!
//! # Composite transitions
//!
//! | Intent              | Roster        | Selection      | Add-friend form |
//! |---------------------|---------------|----------------|-----------------|
//! | `SelectFriend`      | -             | toggle         | closed          |
//! | `OpenAddFriendForm` | -             | cleared        | open            |
//! | `SubmitAddFriend`   | friend added  | -              | closed          |
//! | `SubmitSplitBill`   | delta applied | cleared        | -               |

pub mod state;
pub mod intent;
pub mod events;
pub mod reducer;
pub mod session;
pub mod forms;
pub mod config;
pub mod telemetry;
pub mod error;

pub use state::{AppState, FormFlags};
pub use intent::Intent;
pub use events::{SessionEvent, SessionEventKind};
pub use reducer::{reduce, Transition};
pub use session::{Dispatch, Session};
pub use forms::{AddFriendDraft, SplitBillDraft};
pub use config::SessionConfig;
pub use error::SessionError;
