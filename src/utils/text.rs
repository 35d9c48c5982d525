//! Text measurement helpers.

use unicode_width::UnicodeWidthStr;

/// Rendered width of a string in terminal columns.
pub fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s) as u16
}
