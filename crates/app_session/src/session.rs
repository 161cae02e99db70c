//! Stateful session wrapper around `reduce`

use tracing::{debug, error, instrument, warn};

use core_kernel::{IdGenerator, RandomIdGenerator};
use domain_ledger::{FriendRoster, ValidationError};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::events::SessionEvent;
use crate::forms::AddFriendDraft;
use crate::intent::Intent;
use crate::reducer::reduce;
use crate::state::AppState;

/// What `Session::dispatch` did with an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The state advanced, emitting this many events
    Applied { events: usize },
    /// Form input was incomplete; nothing changed
    Ignored(ValidationError),
}

/// Owns the current state and applies intents in order
///
/// # Invariants
///
/// - `state` only ever changes to a state returned by `reduce`
/// - `history` holds every event emitted by an applied intent since the
///   last `take_history`, in order
#[derive(Debug)]
pub struct Session<G: IdGenerator = RandomIdGenerator> {
    state: AppState,
    ids: G,
    history: Vec<SessionEvent>,
    avatar_template: String,
}

impl Session<RandomIdGenerator> {
    /// Starts a session per configuration with random identifiers
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::with_id_generator(config, RandomIdGenerator)
    }
}

impl<G: IdGenerator> Session<G> {
    /// Starts a session per configuration with the given identifier source
    pub fn with_id_generator(config: &SessionConfig, ids: G) -> Self {
        let state = if config.seed_roster {
            AppState::seeded()
        } else {
            AppState::new(FriendRoster::new())
        };
        let mut session = Self::with_state(state, ids);
        session.avatar_template = config.default_avatar_template.clone();
        session
    }

    /// Resumes from an existing state with the default avatar template
    pub fn with_state(state: AppState, ids: G) -> Self {
        Self {
            state,
            ids,
            history: Vec::new(),
            avatar_template: SessionConfig::default().default_avatar_template,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn history(&self) -> &[SessionEvent] {
        &self.history
    }

    /// Hands the recorded events to the caller and starts a fresh history
    pub fn take_history(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.history)
    }

    /// An empty add-friend form whose image field starts at the configured
    /// avatar template
    pub fn add_friend_draft(&self) -> AddFriendDraft {
        AddFriendDraft::new(self.avatar_template.clone())
    }

    /// Applies an intent to the current state
    ///
    /// Validation failures are recovered here and reported as
    /// `Dispatch::Ignored`. Any other failure is logged and returned; the
    /// state is unchanged in both cases.
    ///
    /// # Errors
    ///
    /// Returns the error for contract violations such as an unknown friend
    /// id or a split submitted with nothing selected.
    #[instrument(skip(self, intent), fields(intent = intent.kind()))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Dispatch, SessionError> {
        match reduce(&self.state, intent, &self.ids) {
            Ok(transition) => {
                let events = transition.events.len();
                debug!(events, "Intent applied");
                self.state = transition.state;
                self.history.extend(transition.events);
                Ok(Dispatch::Applied { events })
            }
            Err(err) => match err.validation() {
                Some(validation) => {
                    warn!(reason = %validation, "Ignoring incomplete form submission");
                    Ok(Dispatch::Ignored(validation))
                }
                None => {
                    error!(error = %err, "Intent rejected");
                    Err(err)
                }
            },
        }
    }

    /// Applies intents in order, stopping at the first contract violation
    pub fn dispatch_all(
        &mut self,
        intents: impl IntoIterator<Item = Intent>,
    ) -> Result<Vec<Dispatch>, SessionError> {
        intents
            .into_iter()
            .map(|intent| self.dispatch(intent))
            .collect()
    }
}
