//! Formatting utilities for terminal and HTML output

use crate::game::HighlightKind;

/// Background colour for a highlighted cell
#[must_use]
pub const fn highlight_color(kind: HighlightKind) -> &'static str {
    match kind {
        HighlightKind::New => "#d5f7e2",
        HighlightKind::Existing => "#ffc266",
    }
}

/// Escape text for use inside HTML elements and attributes
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pad a cell to a display width counted in characters
#[must_use]
pub fn pad_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
