//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{MeetWhenAhError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_scheduling_config(&settings.scheduling)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(MeetWhenAhError::Config("Bot token is required".to_string()));
    }

    url::Url::parse(&config.datepicker_url)
        .map_err(|e| MeetWhenAhError::Config(format!("Invalid datepicker URL: {e}")))?;
    url::Url::parse(&config.dragselector_url)
        .map_err(|e| MeetWhenAhError::Config(format!("Invalid dragselector URL: {e}")))?;

    if let Some(ref webhook_url) = config.webhook_url {
        url::Url::parse(webhook_url)
            .map_err(|e| MeetWhenAhError::Config(format!("Invalid webhook URL: {e}")))?;
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(MeetWhenAhError::Config(
            "Database URL is required".to_string(),
        ));
    }

    if config.max_connections == 0 {
        return Err(MeetWhenAhError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(MeetWhenAhError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate scheduling configuration
fn validate_scheduling_config(config: &super::SchedulingConfig) -> Result<()> {
    if config.slot_interval_minutes == 0 || 24 * 60 % config.slot_interval_minutes != 0 {
        return Err(MeetWhenAhError::Config(
            "Slot interval must be a positive divisor of a day".to_string(),
        ));
    }

    if config.min_block_minutes == 0 {
        return Err(MeetWhenAhError::Config(
            "Minimum block duration must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(MeetWhenAhError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(MeetWhenAhError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
