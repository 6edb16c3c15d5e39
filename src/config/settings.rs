//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub scheduling: SchedulingConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub webhook_url: Option<String>,
    /// Web app that collects an event name and date range
    pub datepicker_url: String,
    /// Web app that collects a user's per-slot availability
    pub dragselector_url: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Availability scheduling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulingConfig {
    /// Granularity of the selection grid, in minutes
    pub slot_interval_minutes: u32,
    /// How many candidate slots the ranker surfaces
    pub best_slot_limit: usize,
    /// Minimum total span of a contiguous block, in minutes
    pub min_block_minutes: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub max_files: u32,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("MEETWHENAH"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::MeetWhenAhError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                webhook_url: None,
                datepicker_url: "https://localhost:3000/datepicker".to_string(),
                dragselector_url: "https://localhost:3000/dragselector/".to_string(),
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/meetwhenah".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            scheduling: SchedulingConfig {
                slot_interval_minutes: crate::scheduling::SLOT_MINUTES,
                best_slot_limit: crate::scheduling::DEFAULT_BEST_SLOT_LIMIT,
                min_block_minutes: crate::scheduling::DEFAULT_MIN_BLOCK_MINUTES,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/meetwhenah".to_string(),
                max_files: 5,
            },
        }
    }
}
