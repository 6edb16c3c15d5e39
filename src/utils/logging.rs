//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the meetwhenah application.

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "meetwhenah.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log user actions with structured data
pub fn log_user_action(tele_id: i64, action: &str, details: Option<&str>) {
    info!(
        tele_id = tele_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log event scheduling actions
pub fn log_event_action(event_code: &str, action: &str, tele_id: i64, details: Option<&str>) {
    info!(
        event_code = event_code,
        action = action,
        tele_id = tele_id,
        details = details,
        "Event action performed"
    );
}

/// Log a recomputation of an event's derived scheduling data
pub fn log_recompute(event_code: &str, slot_count: usize, best_found: bool) {
    debug!(
        event_code = event_code,
        slot_count = slot_count,
        best_found = best_found,
        "Derived scheduling data recomputed"
    );
}
