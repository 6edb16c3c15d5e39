//! Availability repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::availability::AvailabilityFact;
use crate::scheduling::TimeSlot;
use crate::utils::errors::MeetWhenAhError;

#[derive(Debug, Clone)]
pub struct AvailabilityRepository {
    pool: PgPool,
}

impl AvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace a user's availability facts for an event.
    ///
    /// Delete and insert run in one transaction so a failed submission never
    /// leaves partial state behind.
    pub async fn replace_for_user(
        &self,
        event_id: i64,
        user_id: i64,
        slots: &[TimeSlot],
    ) -> Result<(), MeetWhenAhError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_availability WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for slot in slots {
            sqlx::query(
                r#"
                INSERT INTO user_availability (event_id, user_id, available_date, available_time, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (event_id, user_id, available_date, available_time) DO NOTHING
                "#,
            )
            .bind(event_id)
            .bind(user_id)
            .bind(slot.date)
            .bind(slot.time)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// All availability facts for an event
    pub async fn list_for_event(
        &self,
        event_id: i64,
    ) -> Result<Vec<AvailabilityFact>, MeetWhenAhError> {
        let facts = sqlx::query_as::<_, AvailabilityFact>(
            r#"
            SELECT id, event_id, user_id, available_date, available_time, created_at
            FROM user_availability
            WHERE event_id = $1
            ORDER BY available_date ASC, available_time ASC, id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(facts)
    }

    /// One user's availability facts for an event
    pub async fn list_for_user(
        &self,
        event_id: i64,
        user_id: i64,
    ) -> Result<Vec<AvailabilityFact>, MeetWhenAhError> {
        let facts = sqlx::query_as::<_, AvailabilityFact>(
            r#"
            SELECT id, event_id, user_id, available_date, available_time, created_at
            FROM user_availability
            WHERE event_id = $1 AND user_id = $2
            ORDER BY available_date ASC, available_time ASC
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(facts)
    }
}
