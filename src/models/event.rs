//! Event model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    /// Shareable 16-character code, the only externally-facing handle
    pub event_code: String,
    pub name: String,
    pub details: Option<String>,
    pub creator_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Cached render of the event; advisory, safe to recompute
    pub display_text: Option<String>,
    pub best_date: Option<NaiveDate>,
    pub best_start_time: Option<NaiveTime>,
    pub best_end_time: Option<NaiveTime>,
    pub best_participant_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

/// A pending "please start the bot" marker for a user who tried to join
/// before onboarding. Rendered into the display text by the renderer,
/// removed when the user comes back after /start.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingCallout {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub event_code: String,
    pub name: String,
    pub details: Option<String>,
    pub creator_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Cached best-slot fields written back after a recompute
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BestSlotUpdate {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub participant_count: i32,
}
