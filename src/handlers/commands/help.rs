//! Help command handler

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::Bot;

use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    let help_text = "New to <b>meet when ah?</b> <b>DM</b> me <b>/start</b> to create a new event!\n\
        \n\
        /start - Start the bot and create events\n\
        /help - Show this help message\n\
        \n\
        Share an event into a group chat by typing my handle followed by the \
        event name, then let everyone hit the join button.";

    bot.send_message(msg.chat.id, help_text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
