//! Add-friend workflow
//!
//! Turns the add-friend form's name and image template into a new `Friend`
//! with a freshly minted identifier. The workflow does not touch the roster;
//! the caller appends the result and closes the form.

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use core_kernel::{FriendId, IdGenerator};
use crate::error::{LedgerError, ValidationError};
use crate::friend::Friend;

/// Raw add-friend form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewFriendRequest {
    /// Display name
    #[validate(length(min = 1))]
    pub name: String,
    /// Avatar URL template; the new identifier is appended to it
    #[validate(length(min = 1))]
    pub image: String,
}

impl NewFriendRequest {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Checks the request, reporting the first missing field
    ///
    /// # Errors
    ///
    /// `EmptyName` takes precedence over `EmptyImage`.
    pub fn check(&self) -> Result<(), ValidationError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let fields = errors.field_errors();
                if fields.contains_key("name") {
                    Err(ValidationError::EmptyName)
                } else {
                    Err(ValidationError::EmptyImage)
                }
            }
        }
    }
}

/// Builds friends from form input using an injected id generator
#[derive(Debug)]
pub struct AddFriendWorkflow<G: IdGenerator> {
    ids: G,
}

impl<G: IdGenerator> AddFriendWorkflow<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// Validates the input and produces a settled friend
    ///
    /// The avatar reference is the template with the new identifier appended
    /// as an `id` query parameter, so friends sharing one template still get
    /// distinct images.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error when the name or image is empty. No
    /// identifier is consumed in that case.
    pub fn build(&self, request: &NewFriendRequest) -> Result<Friend, LedgerError> {
        request.check()?;

        let id = self.ids.next_friend_id();
        let image = avatar_url(&request.image, &id);

        debug!(friend_id = %id, name = %request.name, "Built new friend");

        Ok(Friend::new(id, request.name.clone(), image))
    }
}

/// Appends the identifier to an avatar template as a query parameter
fn avatar_url(template: &str, id: &FriendId) -> String {
    let separator = if template.contains('?') { '&' } else { '?' };
    format!("{template}{separator}id={}", id.as_uuid())
}
