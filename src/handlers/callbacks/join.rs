//! Join and recalculation callback handlers
//!
//! The join button drives the membership state machine; the calculate button
//! recomputes the event's best timing. Both edit the shared message with the
//! text the core returns.

use std::collections::HashMap;

use teloxide::prelude::*;
use teloxide::types::{
    ButtonRequest, CallbackQuery, ChatId, KeyboardButton, ParseMode, KeyboardMarkup,
    WebAppInfo,
};
use teloxide::Bot;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::Event;
use crate::services::Services;
use crate::utils::errors::{ErrorKind, Result};
use crate::utils::helpers::build_web_app_url;

use super::event_keyboard;

/// Handle a press of the join button
pub async fn handle_join_callback(
    bot: Bot,
    query: CallbackQuery,
    services: Services,
    settings: Settings,
    event_code: &str,
) -> Result<()> {
    let tele_id = query.from.id.0 as i64;
    debug!(tele_id = tele_id, event_code = %event_code, "Join button pressed");

    let outcome = match services
        .event_service
        .handle_join(tele_id, query.from.username.clone(), event_code)
        .await
    {
        Ok(outcome) => outcome,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(event_code = %event_code, "Join for unknown event, ignoring");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if let Some(text) = outcome.display_text {
        edit_shared_message(&bot, &query, event_code, &text).await?;
    }

    if outcome.prompt_availability {
        let event = services.event_service.get_by_code(event_code).await?;
        ask_availability(&bot, &settings, tele_id, &event).await?;
    }

    Ok(())
}

/// Handle a press of the calculate button
pub async fn handle_calculate_callback(
    bot: Bot,
    query: CallbackQuery,
    services: Services,
    event_code: &str,
) -> Result<()> {
    debug!(event_code = %event_code, "Calculate button pressed");

    let event = match services.event_service.get_by_code(event_code).await {
        Ok(event) => event,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(event_code = %event_code, "Calculate for unknown event, ignoring");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let text = services.event_service.recompute(&event).await?;
    edit_shared_message(&bot, &query, event_code, &text).await?;

    Ok(())
}

/// Edit the message the pressed button was attached to
async fn edit_shared_message(
    bot: &Bot,
    query: &CallbackQuery,
    event_code: &str,
    text: &str,
) -> Result<()> {
    if let Some(inline_message_id) = query.inline_message_id.clone() {
        bot.edit_message_text_inline(inline_message_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(event_keyboard(event_code))
            .await?;
    } else if let Some(message) = &query.message {
        bot.edit_message_text(message.chat().id, message.id(), text)
            .parse_mode(ParseMode::Html)
            .reply_markup(event_keyboard(event_code))
            .await?;
    }
    Ok(())
}

/// DM the user a web app button for setting their availability
pub async fn ask_availability(
    bot: &Bot,
    settings: &Settings,
    tele_id: i64,
    event: &Event,
) -> Result<()> {
    let mut params = HashMap::new();
    params.insert("event_id".to_string(), event.event_code.clone());
    params.insert("event_name".to_string(), event.name.clone());
    params.insert("start".to_string(), event.start_date.format("%Y-%m-%d").to_string());
    params.insert("end".to_string(), event.end_date.format("%Y-%m-%d").to_string());

    let url = build_web_app_url(&settings.bot.dragselector_url, &params)?;
    let button = KeyboardButton::new("Set availability").request(ButtonRequest::WebApp(WebAppInfo { url }));
    let markup = KeyboardMarkup::new(vec![vec![button]]);

    bot.send_message(ChatId(tele_id), "Click the button below to set your availability!")
        .reply_markup(markup)
        .await?;

    info!(tele_id = tele_id, event_code = %event.event_code, "Availability prompt sent");
    Ok(())
}
