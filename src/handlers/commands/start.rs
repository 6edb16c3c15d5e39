//! Start command handler
//!
//! Handles the /start command that completes a user's onboarding and offers
//! the event-creation web app.

use std::collections::HashMap;

use teloxide::prelude::*;
use teloxide::types::{ButtonRequest, KeyboardButton, ParseMode, KeyboardMarkup, WebAppInfo};
use teloxide::Bot;
use tracing::{debug, info};

use crate::config::Settings;
use crate::services::Services;
use crate::utils::errors::{MeetWhenAhError, Result};
use crate::utils::logging::log_user_action;

const WELCOME_TEXT: &str = "<b>meet when ah? \u{2013}</b> Say hello to efficient planning and wave \
goodbye to \"so when r we meeting ah?\".\n\
This bot is for the trip that <b>will</b> make it out of the groupchat.\n\
\n\
Click <b>Create Event</b> to get started <b>now</b>!\n\
\n\
Need help? Type /help for more info on commands!";

/// Handle /start command - completes onboarding in private chats
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    services: Services,
    settings: Settings,
) -> Result<()> {
    let from = msg
        .from
        .as_ref()
        .ok_or_else(|| MeetWhenAhError::InvalidInput("No user in message".to_string()))?;

    let tele_id = from.id.0 as i64;
    let chat_id = msg.chat.id;

    debug!(tele_id = tele_id, chat_id = ?chat_id, "Processing /start command");

    if !chat_id.is_user() {
        // In groups just point at the private flow
        bot.send_message(chat_id, WELCOME_TEXT)
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    }

    let user = services
        .user_service
        .start_bot(tele_id, from.username.clone())
        .await?;
    info!(tele_id = tele_id, user_id = user.id, "User started the bot");
    log_user_action(tele_id, "start", None);

    let markup = create_event_keyboard(&settings)?;
    bot.send_message(chat_id, WELCOME_TEXT)
        .parse_mode(ParseMode::Html)
        .reply_markup(markup)
        .await?;

    Ok(())
}

/// Reply keyboard with the event-creation web app button
fn create_event_keyboard(settings: &Settings) -> Result<KeyboardMarkup> {
    let url = crate::utils::helpers::build_web_app_url(&settings.bot.datepicker_url, &HashMap::new())?;
    let button = KeyboardButton::new("Create Event").request(ButtonRequest::WebApp(WebAppInfo { url }));
    Ok(KeyboardMarkup::new(vec![vec![button]]))
}
