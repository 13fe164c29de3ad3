//! Terminal rendering of transcript entries.

use std::fmt::Write as _;

use orion_chat_core::{Sender, TranscriptEntry};
use owo_colors::OwoColorize;

/// Prefix of every body line.
pub const BAR_CHAR: &str = "▎";

/// Returns the name shown above an entry.
#[inline]
pub fn label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Bot => "ORION AI",
    }
}

/// Renders an entry without any styling.
///
/// The first line carries the author and the time, then every line of
/// the rendered text follows behind a bar.
pub fn render_plain(entry: &TranscriptEntry) -> String {
    let mut out = format!("{} · {}\n", label(entry.sender()), entry.timestamp());
    for line in entry.rendered_text().lines() {
        writeln!(out, "{BAR_CHAR}{line}").ok();
    }
    out
}

/// Renders an entry with terminal colors.
pub fn render_colored(entry: &TranscriptEntry) -> String {
    let (header, bar) = match entry.sender() {
        Sender::User => (
            format!("{}", label(entry.sender()).bright_blue().bold()),
            format!("{}", BAR_CHAR.bright_blue()),
        ),
        Sender::Bot => (
            format!("🤖 {}", label(entry.sender()).bright_cyan().bold()),
            format!("{}", BAR_CHAR.bright_cyan()),
        ),
    };

    let mut out = format!("{header} {}\n", entry.timestamp().dimmed());
    for line in entry.rendered_text().lines() {
        writeln!(out, "{bar}{}", line.bright_white()).ok();
    }
    out
}
