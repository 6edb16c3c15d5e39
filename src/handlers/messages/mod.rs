//! Message handlers module
//!
//! Handles web-app-data messages: event creation from the datepicker web app
//! and availability submissions from the dragselector web app.

use chrono::NaiveDate;
use serde::Deserialize;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode, ReplyMarkup};
use teloxide::Bot;
use tracing::{debug, info, warn};

use crate::models::SlotToken;
use crate::services::Services;
use crate::utils::errors::{ErrorKind, MeetWhenAhError, Result};

use crate::handlers::callbacks::event_keyboard;

/// Payload posted by one of the two web apps.
///
/// An availability submission always carries `event_id` and
/// `hours_available`; anything else with an event name and a date range is
/// an event creation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WebAppPayload {
    Availability(AvailabilitySubmission),
    CreateEvent(EventCreation),
}

#[derive(Debug, Deserialize)]
struct EventCreation {
    event_name: String,
    #[serde(default)]
    event_details: Option<String>,
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct AvailabilitySubmission {
    event_id: String,
    hours_available: HoursAvailable,
}

#[derive(Debug, Deserialize)]
struct HoursAvailable {
    #[serde(rename = "dateTimes")]
    date_times: Vec<SlotToken>,
}

/// Handle a web-app-data message
pub async fn handle_web_app_data(bot: Bot, msg: Message, services: Services) -> Result<()> {
    let from = msg
        .from
        .as_ref()
        .ok_or_else(|| MeetWhenAhError::InvalidInput("No user in message".to_string()))?;
    let tele_id = from.id.0 as i64;
    let chat_id = msg.chat.id;

    let Some(web_app_data) = msg.web_app_data() else {
        debug!(tele_id = tele_id, "Message without web app data, ignoring");
        return Ok(());
    };

    let result = match serde_json::from_str::<WebAppPayload>(&web_app_data.data) {
        Ok(WebAppPayload::CreateEvent(creation)) => {
            handle_event_creation(&bot, chat_id, tele_id, &services, creation).await
        }
        Ok(WebAppPayload::Availability(submission)) => {
            handle_availability_submission(&bot, chat_id, tele_id, &services, submission).await
        }
        Err(e) => Err(MeetWhenAhError::InvalidInput(format!(
            "Malformed web app payload: {e}"
        ))),
    };

    // Validation and not-found failures are the user's to fix; everything
    // else propagates to the dispatcher.
    match result {
        Err(err) if matches!(err.kind(), ErrorKind::Validation | ErrorKind::NotFound) => {
            warn!(tele_id = tele_id, error = %err, "Rejected web app submission");
            bot.send_message(chat_id, format!("\u{274c} Could not process your submission: {err}"))
                .await?;
            Ok(())
        }
        other => other,
    }
}

async fn handle_event_creation(
    bot: &Bot,
    chat_id: ChatId,
    tele_id: i64,
    services: &Services,
    creation: EventCreation,
) -> Result<()> {
    let event = services
        .event_service
        .create_event(
            creation.event_name,
            creation.event_details,
            creation.start,
            creation.end,
            Some(tele_id),
        )
        .await?;

    info!(tele_id = tele_id, event_code = %event.event_code, "Event created from web app");

    let share_keyboard = InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::switch_inline_query(
            "Share event",
            format!("{}:{}", event.name, event.event_code),
        ),
    ]]);

    bot.send_message(
        chat_id,
        format!(
            "\u{2705} <b>{}</b> is ready! Share it with your group to start collecting availability.",
            crate::utils::helpers::escape_html(&event.name)
        ),
    )
    .parse_mode(ParseMode::Html)
    .reply_markup(ReplyMarkup::InlineKeyboard(share_keyboard))
    .await?;

    Ok(())
}

async fn handle_availability_submission(
    bot: &Bot,
    chat_id: ChatId,
    tele_id: i64,
    services: &Services,
    submission: AvailabilitySubmission,
) -> Result<()> {
    let event = services
        .availability_service
        .submit(tele_id, &submission.event_id, &submission.hours_available.date_times)
        .await?;

    let text = services.event_service.recompute(&event).await?;

    bot.send_message(
        chat_id,
        format!(
            "\u{2705} Your availability has been saved for <b>{}</b>!",
            crate::utils::helpers::escape_html(&event.name)
        ),
    )
    .parse_mode(ParseMode::Html)
    .await?;

    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .reply_markup(ReplyMarkup::InlineKeyboard(event_keyboard(&event.event_code)))
        .await?;

    Ok(())
}
