//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub tele_id: i64,
    pub tele_handle: Option<String>,
    pub display_name: Option<String>,
    /// Whether the user has ever completed the bot's /start flow
    pub initialised: bool,
    /// False while a join callout for this user is pending on some event
    pub callout_cleared: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Roster label: handle, then display name, then a literal fallback
    pub fn roster_name(&self) -> &str {
        self.tele_handle
            .as_deref()
            .or(self.display_name.as_deref())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub tele_id: i64,
    pub tele_handle: Option<String>,
    pub display_name: Option<String>,
    pub initialised: bool,
    pub callout_cleared: bool,
}

impl CreateUserRequest {
    /// A user created by completing the /start flow
    pub fn onboarded(tele_id: i64, tele_handle: Option<String>) -> Self {
        Self {
            tele_id,
            tele_handle,
            display_name: None,
            initialised: true,
            callout_cleared: true,
        }
    }

    /// A user auto-created by a join attempt before ever starting the bot
    pub fn from_join_attempt(tele_id: i64, tele_handle: Option<String>) -> Self {
        Self {
            tele_id,
            tele_handle,
            display_name: None,
            initialised: false,
            callout_cleared: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(handle: Option<&str>, name: Option<&str>) -> User {
        User {
            id: 1,
            tele_id: 42,
            tele_handle: handle.map(str::to_string),
            display_name: name.map(str::to_string),
            initialised: true,
            callout_cleared: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_roster_name_fallback_order() {
        assert_eq!(user(Some("alice"), Some("Alice L")).roster_name(), "alice");
        assert_eq!(user(None, Some("Alice L")).roster_name(), "Alice L");
        assert_eq!(user(None, None).roster_name(), "Unknown");
    }
}
