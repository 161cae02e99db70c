//! Pure intent handling
//!
//! `reduce` maps `(state, intent)` to the next state. It never mutates its
//! input, so a failed intent leaves the caller holding the previous state
//! untouched.

use core_kernel::{Amount, FriendId, IdGenerator};
use domain_ledger::{AddFriendWorkflow, NewFriendRequest, Payer, Selection, SplitBillWorkflow, LedgerError};

use crate::error::SessionError;
use crate::events::{SessionEvent, SessionEventKind};
use crate::intent::Intent;
use crate::state::AppState;

/// The outcome of an accepted intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub events: Vec<SessionEvent>,
}

impl Transition {
    fn new(state: AppState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    fn emit(mut self, kind: SessionEventKind) -> Self {
        self.events.push(SessionEvent::now(kind));
        self
    }

    /// Event kinds in emission order
    pub fn kinds(&self) -> impl Iterator<Item = &SessionEventKind> {
        self.events.iter().map(|e| &e.kind)
    }
}

/// Applies one intent to a state
///
/// # Arguments
///
/// * `state` - The current state
/// * `intent` - The user action to apply
/// * `ids` - Identifier source for new friends
///
/// # Errors
///
/// - `Ledger(Validation)` for incomplete form input
/// - `Ledger(FriendNotFound)` when an intent names a friend not on the roster
/// - `NoFriendSelected` when a split arrives with nothing selected
pub fn reduce<G: IdGenerator + ?Sized>(
    state: &AppState,
    intent: Intent,
    ids: &G,
) -> Result<Transition, SessionError> {
    match intent {
        Intent::SelectFriend { friend_id } => select_friend(state, friend_id),
        Intent::OpenAddFriendForm => Ok(open_add_friend_form(state)),
        Intent::CloseAddFriendForm => Ok(close_add_friend_form(state)),
        Intent::ToggleAddFriendForm => {
            if state.forms.show_add_friend {
                Ok(close_add_friend_form(state))
            } else {
                Ok(open_add_friend_form(state))
            }
        }
        Intent::SubmitAddFriend { name, image } => {
            submit_add_friend(state, NewFriendRequest { name, image }, ids)
        }
        Intent::SubmitSplitBill {
            bill,
            paid_by_user,
            payer,
        } => submit_split_bill(state, bill, paid_by_user, payer),
    }
}

fn select_friend(state: &AppState, friend_id: FriendId) -> Result<Transition, SessionError> {
    if !state.roster.contains(&friend_id) {
        return Err(LedgerError::FriendNotFound(friend_id).into());
    }

    let change = state.selection.select(friend_id);
    let mut next = state.clone();
    next.selection = change.selection;

    let mut transition = match change.selection {
        Selection::Selected(id) => {
            Transition::new(next).emit(SessionEventKind::FriendSelected { friend_id: id })
        }
        Selection::None => Transition::new(next).emit(SessionEventKind::SelectionCleared),
    };

    if change.close_add_friend_form {
        transition = hide_add_friend_form(transition);
    }

    Ok(transition)
}

fn open_add_friend_form(state: &AppState) -> Transition {
    let mut next = state.clone();
    next.forms.show_add_friend = true;
    next.selection = state.selection.clear();

    let mut transition = Transition::new(next);
    if !state.forms.show_add_friend {
        transition = transition.emit(SessionEventKind::AddFriendFormOpened);
    }
    if !state.selection.is_none() {
        transition = transition.emit(SessionEventKind::SelectionCleared);
    }
    transition
}

fn close_add_friend_form(state: &AppState) -> Transition {
    hide_add_friend_form(Transition::new(state.clone()))
}

/// Hides the add-friend form, emitting an event only if it was visible
fn hide_add_friend_form(mut transition: Transition) -> Transition {
    if transition.state.forms.show_add_friend {
        transition.state.forms.show_add_friend = false;
        transition = transition.emit(SessionEventKind::AddFriendFormClosed);
    }
    transition
}

fn submit_add_friend<G: IdGenerator + ?Sized>(
    state: &AppState,
    request: NewFriendRequest,
    ids: &G,
) -> Result<Transition, SessionError> {
    let friend = AddFriendWorkflow::new(ids).build(&request)?;
    let friend_id = friend.id();
    let name = friend.name().to_string();

    let mut next = state.clone();
    next.roster = state.roster.add_friend(friend)?;

    let transition = Transition::new(next).emit(SessionEventKind::FriendAdded { friend_id, name });
    Ok(hide_add_friend_form(transition))
}

fn submit_split_bill(
    state: &AppState,
    bill: Amount,
    paid_by_user: Amount,
    payer: Payer,
) -> Result<Transition, SessionError> {
    let friend_id = state
        .selection
        .friend_id()
        .ok_or(SessionError::NoFriendSelected)?;

    let delta = SplitBillWorkflow::compute_delta(bill, paid_by_user, payer)?;

    let mut next = state.clone();
    next.roster = state.roster.apply_delta(&friend_id, delta)?;
    next.selection = state.selection.clear();

    let new_balance = next
        .roster
        .get(&friend_id)
        .map(|f| f.balance())
        .ok_or(LedgerError::FriendNotFound(friend_id))?;

    Ok(Transition::new(next)
        .emit(SessionEventKind::BalanceAdjusted {
            friend_id,
            delta,
            new_balance,
        })
        .emit(SessionEventKind::SelectionCleared))
}
