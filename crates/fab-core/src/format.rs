//! Detail-text formatting — breaks numbered-list markers onto their own lines.
//!
//! Cookbook cells often pack a whole procedure into one cell:
//! `"1.Check power 2.Check cable"`. For display, each `<digits>.` marker
//! starts a new line; text without markers passes through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.)").expect("numbered-marker pattern must compile"));

/// Insert a line break before every `<digits>.` marker, then strip any
/// leading breaks so a marker at the start of the text does not produce an
/// empty first line.
pub fn break_numbered_markers(text: &str) -> String {
    NUMBERED_MARKER
        .replace_all(text, "\n$1")
        .trim_start_matches('\n')
        .to_string()
}
