//! Availability model
//!
//! An availability fact is one user's claim "I am free at this slot" for a
//! specific event. A user's prior facts for an event are fully replaced on
//! resubmission.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AvailabilityFact {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub available_date: NaiveDate,
    pub available_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// One wire-format entry of an availability submission.
///
/// `date` is `DD/MM/YYYY`, `time` is a 4-digit 24-hour `HHMM` token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotToken {
    pub date: String,
    pub time: String,
}
