//! Event repository implementation
//!
//! Events own their memberships and pending callouts, so those tables are
//! managed here as well.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::event::{BestSlotUpdate, CreateEventRequest, Event, Membership};
use crate::models::user::User;
use crate::utils::errors::MeetWhenAhError;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, MeetWhenAhError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (event_code, name, details, creator_id, start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, event_code, name, details, creator_id, start_date, end_date,
                      display_text, best_date, best_start_time, best_end_time, best_participant_count,
                      created_at, updated_at
            "#
        )
        .bind(request.event_code)
        .bind(request.name)
        .bind(request.details)
        .bind(request.creator_id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by internal ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, MeetWhenAhError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, event_code, name, details, creator_id, start_date, end_date,
                   display_text, best_date, best_start_time, best_end_time, best_participant_count,
                   created_at, updated_at
            FROM events WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by its shareable code
    pub async fn find_by_code(&self, event_code: &str) -> Result<Option<Event>, MeetWhenAhError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, event_code, name, details, creator_id, start_date, end_date,
                   display_text, best_date, best_start_time, best_end_time, best_participant_count,
                   created_at, updated_at
            FROM events WHERE event_code = $1
            "#,
        )
        .bind(event_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Write the cached best-slot fields
    pub async fn update_best_slot(
        &self,
        id: i64,
        best: &BestSlotUpdate,
    ) -> Result<(), MeetWhenAhError> {
        sqlx::query(
            r#"
            UPDATE events
            SET best_date = $2, best_start_time = $3, best_end_time = $4,
                best_participant_count = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(best.date)
        .bind(best.start_time)
        .bind(best.end_time)
        .bind(best.participant_count)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Write the cached display text
    pub async fn update_display_text(&self, id: i64, text: &str) -> Result<(), MeetWhenAhError> {
        sqlx::query("UPDATE events SET display_text = $2, updated_at = $3 WHERE id = $1")
            .bind(id)
            .bind(text)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Add a user to an event.
    ///
    /// The unique (event_id, user_id) constraint is the hard consistency
    /// guarantee against racing duplicate joins.
    pub async fn insert_membership(
        &self,
        event_id: i64,
        user_id: i64,
    ) -> Result<Membership, MeetWhenAhError> {
        let membership = sqlx::query_as::<_, Membership>(
            r#"
            INSERT INTO event_members (event_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, user_id, joined_at
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(membership)
    }

    /// Check if a user is a member of an event
    pub async fn is_member(&self, event_id: i64, user_id: i64) -> Result<bool, MeetWhenAhError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM event_members WHERE event_id = $1 AND user_id = $2")
                .bind(event_id)
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0 > 0)
    }

    /// All members of an event with their user rows, in join order
    pub async fn list_members(&self, event_id: i64) -> Result<Vec<User>, MeetWhenAhError> {
        let members = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.tele_id, u.tele_handle, u.display_name, u.initialised, u.callout_cleared,
                   u.created_at, u.updated_at
            FROM event_members em
            INNER JOIN users u ON u.id = em.user_id
            WHERE em.event_id = $1
            ORDER BY em.joined_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Record a pending "please start the bot" callout for a user
    pub async fn add_callout(&self, event_id: i64, user_id: i64) -> Result<(), MeetWhenAhError> {
        sqlx::query(
            r#"
            INSERT INTO event_callouts (event_id, user_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (event_id, user_id) DO NOTHING
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a pending callout once the user has started the bot
    pub async fn remove_callout(&self, event_id: i64, user_id: i64) -> Result<(), MeetWhenAhError> {
        sqlx::query("DELETE FROM event_callouts WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Users with a pending callout on an event, oldest first
    pub async fn list_callouts(&self, event_id: i64) -> Result<Vec<User>, MeetWhenAhError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.tele_id, u.tele_handle, u.display_name, u.initialised, u.callout_cleared,
                   u.created_at, u.updated_at
            FROM event_callouts ec
            INNER JOIN users u ON u.id = ec.user_id
            WHERE ec.event_id = $1
            ORDER BY ec.created_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
