//! User service implementation
//!
//! Handles the /start onboarding flow and user lookups. The two onboarding
//! flags only ever move toward `true` here.

use tracing::{debug, info};

use crate::database::store::EventStore;
use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct UserService<S> {
    store: S,
}

impl<S: EventStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Handle a completed /start in a private chat.
    ///
    /// Creates the user fully onboarded, or flips a previously auto-created
    /// user's flags to `initialised = true`. A user who was created by a
    /// join attempt keeps `callout_cleared = false` until they click join
    /// again and the pending callout is cleared.
    pub async fn start_bot(&self, tele_id: i64, tele_handle: Option<String>) -> Result<User> {
        debug!(tele_id = tele_id, "Processing /start");

        match self.store.find_user_by_tele_id(tele_id).await? {
            Some(user) if !user.initialised => {
                let user = self
                    .store
                    .set_onboarding_flags(user.id, true, user.callout_cleared)
                    .await?;
                info!(tele_id = tele_id, user_id = user.id, "User completed onboarding");
                Ok(user)
            }
            Some(user) => Ok(user),
            None => {
                let user = self
                    .store
                    .create_user(CreateUserRequest::onboarded(tele_id, tele_handle))
                    .await?;
                info!(tele_id = tele_id, user_id = user.id, "New user registered");
                Ok(user)
            }
        }
    }

    /// Get user by Telegram ID
    pub async fn get_by_tele_id(&self, tele_id: i64) -> Result<Option<User>> {
        self.store.find_user_by_tele_id(tele_id).await
    }
}
