//! ANSI color helpers for terminal output

use colored::{Color, Colorize};
use dialogue_core::Role;

const SPEAKER_PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Yellow,
];

/// Get colored role indicator
pub fn colored_role(role: Role) -> String {
    match role {
        Role::User => "user".cyan().to_string(),
        Role::Assistant => "assistant".green().to_string(),
        Role::System => "system".yellow().to_string(),
    }
}

/// Get colored speaker name; the same name always gets the same color
pub fn colored_speaker(name: &str) -> String {
    name.color(speaker_color(name)).bold().to_string()
}

fn speaker_color(name: &str) -> Color {
    let sum = name.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    SPEAKER_PALETTE[sum % SPEAKER_PALETTE.len()]
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored label
pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Get colored warning message
pub fn warning(text: &str) -> String {
    format!("{} {}", "⚠".yellow(), text)
}
