//! Header bar widget — the one-line strip at the top of the screen.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// Renders the application title, the loaded dataset name, and the record
/// count. Keybinding hints (`q:quit  ?:help`) are right-aligned in the same
/// row.
pub struct HeaderBar<'a> {
    dataset: &'a str,
    record_count: usize,
    _theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    pub fn new(dataset: &'a str, record_count: usize, theme: &'a Theme) -> Self {
        Self { dataset, record_count, _theme: theme }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " fab — FA cookbook  ({}: {} records)",
            self.dataset, self.record_count
        );
        buf.set_string(
            area.x,
            area.y,
            title,
            Style::default().add_modifier(Modifier::BOLD),
        );

        // Keybinding hints at the right edge
        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
