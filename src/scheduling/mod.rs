//! Availability scheduling core
//!
//! Pure, in-memory computations that turn raw per-user date/time selections
//! into ranked, contiguous meeting-time candidates, plus the deterministic
//! renderer for an event's shared message. Nothing in this module touches
//! the database or the Telegram API.

pub mod aggregate;
pub mod blocks;
pub mod display;
pub mod rank;
pub mod slot;

// Re-export the core surface
pub use aggregate::{aggregate_slots, AvailabilitySlot};
pub use blocks::{merge_contiguous, ContiguousBlock, DEFAULT_MIN_BLOCK_MINUTES};
pub use display::{callout_line, render_display_text};
pub use rank::{rank_slots, DEFAULT_BEST_SLOT_LIMIT};
pub use slot::{
    date_range, day_slots, format_time_token, parse_date_token, parse_time_token, TimeSlot,
    SLOT_MINUTES,
};
