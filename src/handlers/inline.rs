//! Inline query handler
//!
//! Lets a user share an event into any chat by typing the bot's handle plus
//! `<event name>:<event code>`. The answer carries the event's display text
//! with the join/calculate keyboard attached.

use teloxide::prelude::*;
use teloxide::types::{
    InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
    InputMessageContentText, ParseMode,
};
use teloxide::Bot;
use tracing::{debug, warn};

use crate::services::Services;
use crate::utils::errors::{ErrorKind, Result};

use super::callbacks::event_keyboard;

/// Handle an inline share query of the form `<event name>:<event code>`
pub async fn handle_inline_query(bot: Bot, query: InlineQuery, services: Services) -> Result<()> {
    let Some((_, event_code)) = query.query.split_once(':') else {
        debug!(query = %query.query, "Inline query without an event code, ignoring");
        return Ok(());
    };

    let event = match services.event_service.get_by_code(event_code.trim()).await {
        Ok(event) => event,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(event_code = %event_code, "Inline share of unknown event, ignoring");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let text = match event.display_text.clone() {
        Some(text) => text,
        None => services.event_service.recompute(&event).await?,
    };

    let article = InlineQueryResultArticle::new(
        "1",
        query.query.clone(),
        InputMessageContent::Text(InputMessageContentText::new(text).parse_mode(ParseMode::Html)),
    )
    .reply_markup(event_keyboard(&event.event_code));

    bot.answer_inline_query(query.id, vec![InlineQueryResult::Article(article)])
        .await?;

    Ok(())
}
