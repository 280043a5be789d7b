//! ANSI styling helpers.

/// Bold text.
pub const BOLD: &str = "\x1b[1m";
/// Yellow text.
pub const YELLOW: &str = "\x1b[33m";
/// Dimmed text.
pub const DIM: &str = "\x1b[2m";
/// Reset all formatting.
pub const RESET: &str = "\x1b[0m";

/// Full block used for the filled part of a bar.
const BAR_FILL: char = '█';

/// Wraps `text` in the given escape codes.
fn paint(codes: &str, text: &str) -> String {
    format!("{codes}{text}{RESET}")
}

/// Bold subheader.
pub fn subheader(text: &str) -> String {
    paint(BOLD, text)
}

/// Dimmed text.
pub fn dim(text: &str) -> String {
    paint(DIM, text)
}

/// Yellow warning.
pub fn warning(text: &str) -> String {
    paint(YELLOW, text)
}

/// Dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Renders `count` as a bar scaled against `max` over `width` cells.
///
/// Any non-zero count gets at least one cell. The result is unstyled.
pub fn bar(count: u64, max: u64, width: usize) -> String {
    if max == 0 || count == 0 || width == 0 {
        return String::new();
    }
    let count = count.min(max);
    let cells = (u128::from(count) * width as u128).div_ceil(u128::from(max));
    let cells = usize::try_from(cells).unwrap_or(width).max(1);
    BAR_FILL.to_string().repeat(cells)
}
