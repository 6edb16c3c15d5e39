//! User repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::user::{CreateUserRequest, User};
use crate::utils::errors::MeetWhenAhError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, MeetWhenAhError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (tele_id, tele_handle, display_name, initialised, callout_cleared, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, tele_id, tele_handle, display_name, initialised, callout_cleared, created_at, updated_at
            "#
        )
        .bind(request.tele_id)
        .bind(request.tele_handle)
        .bind(request.display_name)
        .bind(request.initialised)
        .bind(request.callout_cleared)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by internal ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, MeetWhenAhError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, tele_id, tele_handle, display_name, initialised, callout_cleared, created_at, updated_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by Telegram ID
    pub async fn find_by_tele_id(&self, tele_id: i64) -> Result<Option<User>, MeetWhenAhError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, tele_id, tele_handle, display_name, initialised, callout_cleared, created_at, updated_at FROM users WHERE tele_id = $1"
        )
        .bind(tele_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update the two onboarding flags
    pub async fn set_onboarding_flags(
        &self,
        id: i64,
        initialised: bool,
        callout_cleared: bool,
    ) -> Result<User, MeetWhenAhError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET initialised = $2, callout_cleared = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, tele_id, tele_handle, display_name, initialised, callout_cleared, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(initialised)
        .bind(callout_cleared)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Refresh the handle/display name seen on an inbound update
    pub async fn update_identity(
        &self,
        id: i64,
        tele_handle: Option<String>,
        display_name: Option<String>,
    ) -> Result<User, MeetWhenAhError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET tele_handle = COALESCE($2, tele_handle),
                display_name = COALESCE($3, display_name),
                updated_at = $4
            WHERE id = $1
            RETURNING id, tele_id, tele_handle, display_name, initialised, callout_cleared, created_at, updated_at
            "#
        )
        .bind(id)
        .bind(tele_handle)
        .bind(display_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
