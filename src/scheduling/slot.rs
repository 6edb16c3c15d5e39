//! Time-slot model
//!
//! A slot is a single 30-minute (date, time-of-day) unit. Wire tokens use
//! `HHMM` for times and `DD/MM/YYYY` for dates; both parse into chrono types
//! here and nowhere else.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{SlotParseError, SlotParseResult};

/// Length of one slot in minutes
pub const SLOT_MINUTES: u32 = 30;

/// A discrete (date, time-of-day) slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl TimeSlot {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse a wire-format (`DD/MM/YYYY`, `HHMM`) token pair
    pub fn from_tokens(date_token: &str, time_token: &str) -> SlotParseResult<Self> {
        Ok(Self {
            date: parse_date_token(date_token)?,
            time: parse_time_token(time_token)?,
        })
    }

    /// Whether the time-of-day sits on a 30-minute boundary
    pub fn is_aligned(&self) -> bool {
        self.time.minute() % SLOT_MINUTES == 0 && self.time.second() == 0
    }
}

/// Parse a 4-digit `HHMM` time token.
///
/// The token must be exactly four ASCII digits; hour 0-23 and minute 0-59
/// are accepted (the 30-minute domain convention is enforced by callers).
pub fn parse_time_token(token: &str) -> SlotParseResult<NaiveTime> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SlotParseError::BadTimeShape(token.to_string()));
    }

    let hour: u32 = token[..2]
        .parse()
        .map_err(|_| SlotParseError::BadTimeShape(token.to_string()))?;
    let minute: u32 = token[2..]
        .parse()
        .map_err(|_| SlotParseError::BadTimeShape(token.to_string()))?;

    if hour > 23 {
        return Err(SlotParseError::HourOutOfRange(token.to_string()));
    }
    if minute > 59 {
        return Err(SlotParseError::MinuteOutOfRange(token.to_string()));
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| SlotParseError::BadTimeShape(token.to_string()))
}

/// Format a time back into its 4-digit wire token
pub fn format_time_token(time: NaiveTime) -> String {
    format!("{:02}{:02}", time.hour(), time.minute())
}

/// Parse a `DD/MM/YYYY` date token
pub fn parse_date_token(token: &str) -> SlotParseResult<NaiveDate> {
    let parts: Vec<&str> = token.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(SlotParseError::BadDateShape(token.to_string()));
    };

    if day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return Err(SlotParseError::BadDateShape(token.to_string()));
    }
    if ![day, month, year]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(SlotParseError::BadDateShape(token.to_string()));
    }

    let day: u32 = day
        .parse()
        .map_err(|_| SlotParseError::BadDateShape(token.to_string()))?;
    let month: u32 = month
        .parse()
        .map_err(|_| SlotParseError::BadDateShape(token.to_string()))?;
    let year: i32 = year
        .parse()
        .map_err(|_| SlotParseError::BadDateShape(token.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SlotParseError::InvalidDate(token.to_string()))
}

/// Expand a date range into an inclusive ordered sequence of dates.
///
/// An inverted range yields an empty sequence.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Expand a day into an ordered sequence of time-of-day slots.
///
/// Used by the transport layer to render a selection grid. A zero interval
/// yields an empty sequence.
pub fn day_slots(interval_minutes: u32) -> Vec<NaiveTime> {
    if interval_minutes == 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut minutes = 0u32;
    while minutes < 24 * 60 {
        if let Some(time) = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) {
            slots.push(time);
        }
        minutes += interval_minutes;
    }
    slots
}

/// Minutes since midnight for a time-of-day
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// The moment one slot's 30 minutes end
pub fn slot_end(time: NaiveTime) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(SLOT_MINUTES as i64))
        .0
}
