//! Availability service implementation
//!
//! Parses availability submissions off the wire and replaces a user's facts
//! for an event wholesale. A submission with one malformed entry is rejected
//! in full before anything is stored.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::config::Settings;
use crate::database::store::EventStore;
use crate::models::availability::SlotToken;
use crate::models::event::Event;
use crate::scheduling::{date_range, day_slots, format_time_token, TimeSlot};
use crate::utils::errors::{MeetWhenAhError, Result};

#[derive(Debug, Clone)]
pub struct AvailabilityService<S> {
    store: S,
    settings: Settings,
}

impl<S: EventStore> AvailabilityService<S> {
    pub fn new(store: S, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// Replace a user's availability for an event from wire-format tokens.
    ///
    /// Every entry is parsed and validated before any state mutation; the
    /// replace itself is all-or-nothing at the store.
    pub async fn submit(
        &self,
        tele_id: i64,
        event_code: &str,
        entries: &[SlotToken],
    ) -> Result<Event> {
        let slots = parse_submission(entries)?;

        let event = self
            .store
            .find_event_by_code(event_code)
            .await?
            .ok_or_else(|| MeetWhenAhError::EventNotFound {
                event_code: event_code.to_string(),
            })?;
        let user = self
            .store
            .find_user_by_tele_id(tele_id)
            .await?
            .ok_or(MeetWhenAhError::UserNotFound { tele_id })?;

        self.store
            .replace_availability(event.id, user.id, &slots)
            .await?;

        info!(
            tele_id = tele_id,
            event_code = %event.event_code,
            slot_count = slots.len(),
            "Availability replaced"
        );
        Ok(event)
    }

    /// The selection grid for an event: every date in its range and every
    /// time-of-day slot at the configured interval.
    ///
    /// Pure expansion handed to the transport layer for rendering; nothing
    /// here is recomputed from stored facts.
    pub fn selection_grid(&self, event: &Event) -> (Vec<NaiveDate>, Vec<NaiveTime>) {
        debug!(event_code = %event.event_code, "Expanding selection grid");
        (
            date_range(event.start_date, event.end_date),
            day_slots(self.settings.scheduling.slot_interval_minutes),
        )
    }
}

/// Parse a full submission, rejecting it on the first malformed or
/// misaligned entry.
fn parse_submission(entries: &[SlotToken]) -> Result<Vec<TimeSlot>> {
    let mut slots = Vec::with_capacity(entries.len());
    for entry in entries {
        let slot = TimeSlot::from_tokens(&entry.date, &entry.time)?;
        if !slot.is_aligned() {
            return Err(MeetWhenAhError::InvalidInput(format!(
                "time {} is not on a 30-minute boundary",
                format_time_token(slot.time)
            )));
        }
        slots.push(slot);
    }
    Ok(slots)
}
