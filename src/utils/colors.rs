/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const REVERSE: &str = "\x1b[7m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY for empty cell values and RESET otherwise, so blank roster
/// fields render dimmed instead of invisible.
pub fn color_for_cell(value: &str) -> &'static str {
    if value.trim().is_empty() { GREY } else { RESET }
}

/// Highlight for the current page number in the pagination bar.
pub fn highlight_page(label: &str) -> String {
    format!("{REVERSE}{BOLD} {label} {RESET}")
}
