use ratatui::style::{Color, Modifier, Style};

use crate::toasts::types::Level;

// Default styles
const DEFAULT_TEXT_STYLE: Style = Style::new();
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::DarkGray);

// Level-based accent styles
const SUCCESS_ACCENT: Style = Style::new().fg(Color::Green);
const WARNING_ACCENT: Style = Style::new().fg(Color::Yellow);
const ERROR_ACCENT: Style = Style::new().fg(Color::Red);
const INFO_ACCENT: Style = Style::new().fg(Color::Blue);

/// Returns the icon glyph shown in the card title for a level.
pub fn level_icon(level: Level) -> &'static str {
	match level {
		Level::Success => "✓",
		Level::Error => "✗",
		Level::Warning => "!",
		Level::Info => "i",
	}
}

/// Resolves the final styles for a toast card based on its level.
///
/// # Arguments
///
/// * `level` - The toast level driving the accent color
///
/// # Returns
///
/// A tuple of (border_style, title_style, text_style, description_style).
/// This is a pure presentation lookup; swapping the palette changes no
/// behavior.
pub fn resolve_styles(level: Level) -> (Style, Style, Style, Style) {
	let accent = match level {
		Level::Success => SUCCESS_ACCENT,
		Level::Warning => WARNING_ACCENT,
		Level::Error => ERROR_ACCENT,
		Level::Info => INFO_ACCENT,
	};
	(
		accent,
		accent.add_modifier(Modifier::BOLD),
		DEFAULT_TEXT_STYLE,
		DESCRIPTION_STYLE,
	)
}
