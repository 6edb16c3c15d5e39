//! Callback handlers module
//!
//! Dispatches inline-keyboard callback queries: joining an event and
//! recalculating its best timing.

pub mod join;

use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::Bot;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::services::Services;
use crate::utils::errors::Result;
use crate::utils::helpers::is_event_code;

/// Prefix carried by the recalculation button's callback data
pub const CALCULATE_PREFIX: &str = "Calculate ";

/// The inline keyboard attached to every shared event message
pub fn event_keyboard(event_code: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("Join event", event_code.to_string()),
        InlineKeyboardButton::callback(
            "Calculate Best Timing",
            format!("{CALCULATE_PREFIX}{event_code}"),
        ),
    ]])
}

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: Services,
    settings: Settings,
) -> Result<()> {
    let Some(data) = query.data.clone() else {
        debug!("Callback query without data, ignoring");
        return Ok(());
    };

    // Stop the button spinner regardless of what happens next
    bot.answer_callback_query(query.id.clone()).await?;

    if let Some(event_code) = data.strip_prefix(CALCULATE_PREFIX) {
        join::handle_calculate_callback(bot, query, services, event_code).await
    } else if is_event_code(&data) {
        join::handle_join_callback(bot, query, services, settings, &data).await
    } else {
        warn!(data = %data, "Unrecognized callback data");
        Ok(())
    }
}
