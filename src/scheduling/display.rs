//! Display renderer
//!
//! Deterministically formats an event's current state into the shared
//! Telegram message text. Pure function of the event row, the member roster
//! and the pending callouts; no clock or locale involved.

use crate::models::{Event, User};
use crate::utils::helpers::escape_html;

use super::slot::format_time_token;

/// Placeholder shown while a best date/timing has not been computed
const PLACEHOLDER: &str = "[]";

/// Render the shared display text for an event.
///
/// Pending callouts are rendered from structured markers rather than being
/// spliced in and out of the cached text, so the output is always a pure
/// function of current state.
pub fn render_display_text(event: &Event, members: &[User], callouts: &[User]) -> String {
    let date_range = format!(
        "{} - {}",
        event.start_date.format("%-d %b %Y"),
        event.end_date.format("%-d %b %Y"),
    );

    let best_date = event
        .best_date
        .map(|d| d.format("%-d %b %Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let best_timing = match (event.best_start_time, event.best_end_time) {
        (Some(start), Some(end)) => {
            format!("[{} - {}]", format_time_token(start), format_time_token(end))
        }
        _ => PLACEHOLDER.to_string(),
    };

    let mut text = format!(
        "Date range: {date_range}\n\
         Best date: {best_date}\n\
         Best timing: {best_timing}\n\
         \n\
         Join this event by clicking the join button below!\n\
         \n\
         Joining:\n\
         ---------------\n"
    );

    for member in members {
        text.push_str(&format!("\n <b>{}</b>", escape_html(member.roster_name())));
    }

    for user in callouts {
        text.push_str(&format!("\n <b>{}</b>", callout_line(user)));
    }

    text
}

/// The instruction asking an auto-created user to start the bot before
/// their join can be finalized
pub fn callout_line(user: &User) -> String {
    let who = match &user.tele_handle {
        Some(handle) => format!("@{}", escape_html(handle)),
        None => escape_html(user.roster_name()),
    };
    format!(
        "{who}, please do /start in a direct message with me at @meetwhenah_bot. \
         Click the join button again when you are done!"
    )
}
