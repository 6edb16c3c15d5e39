//! meetwhenah Telegram Bot
//!
//! A Telegram bot that lets a group propose a date/time window, collect each
//! member's availability, and compute the best overlapping meeting times.
//! This library provides the availability aggregation engine, the
//! event-membership state machine, and the transport/persistence shells
//! around them.

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod scheduling;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ErrorKind, MeetWhenAhError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, EventStore};
pub use services::{ServiceFactory, Services};
pub use state::{JoinAction, MembershipState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
