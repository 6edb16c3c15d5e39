//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for web-app-data submissions
//! - The inline-query handler for sharing events into chats

pub mod callbacks;
pub mod commands;
pub mod inline;
pub mod messages;

// Re-export commonly used handler functions
pub use callbacks::handle_callback_query;
pub use commands::{handle_command, Command};
pub use inline::handle_inline_query;
pub use messages::handle_web_app_data;
