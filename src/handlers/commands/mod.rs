//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod help;
pub mod start;

use teloxide::types::Message;
use teloxide::utils::command::BotCommands;
use teloxide::Bot;

use crate::config::Settings;
use crate::services::Services;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "meet when ah? commands:")]
pub enum Command {
    #[command(description = "Start the bot and create events")]
    Start,
    #[command(description = "Show help information")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Services,
    settings: Settings,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services, settings).await,
        Command::Help => help::handle_help(bot, msg).await,
    }
}
