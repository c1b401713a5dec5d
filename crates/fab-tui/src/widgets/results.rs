//! Results pane — scrollable report of matched groups.
//!
//! Each group renders as a block: the error-code header in its tier colour,
//! a textual success-rate gauge, the representative Risk Station / FA by TRC
//! panels, and one detail section per matching record. A failed search
//! renders the not-found banner instead.
//!
//! # Scroll semantics
//!
//! `scroll_offset` = number of rendered lines hidden at the top (0 = top of
//! the report). The report is a finite document, so scrolling anchors to the
//! top rather than tailing.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use fab_core::MatchGroup;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;
const GAUGE_WIDTH: usize = 20;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// What the results pane is currently showing.
#[derive(Debug, Default)]
pub enum ResultsContent {
    /// No search has run yet.
    #[default]
    Idle,
    /// Groups from the last successful search.
    Groups(Vec<MatchGroup>),
    /// The last search matched nothing; holds the normalized query.
    NotFound(String),
}

pub struct ResultsState {
    pub content: ResultsContent,
    /// Number of rendered lines hidden at the top (0 = top).
    pub scroll_offset: usize,
    /// Show the per-record Model/Station line in details.
    pub show_models: bool,
    /// Cached from the last render so `handle()` can clamp scrolling.
    last_height: Cell<usize>,
    last_total: Cell<usize>,
}

impl ResultsState {
    pub fn new(show_models: bool) -> Self {
        Self {
            content: ResultsContent::Idle,
            scroll_offset: 0,
            show_models,
            last_height: Cell::new(40),
            last_total: Cell::new(0),
        }
    }

    /// Replace the content and jump back to the top of the report.
    pub fn set_content(&mut self, content: ResultsContent) {
        self.content = content;
        self.scroll_offset = 0;
    }

    fn max_offset(&self) -> usize {
        self.last_total
            .get()
            .saturating_sub(self.last_height.get().max(1))
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.scroll_offset = (self.scroll_offset + 1).min(self.max_offset());
            }
            AppEvent::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_STEP);
                tracing::debug!(scroll_offset = self.scroll_offset, "results: page up");
            }
            AppEvent::ScrollDown => {
                self.scroll_offset = (self.scroll_offset + PAGE_STEP).min(self.max_offset());
                tracing::debug!(scroll_offset = self.scroll_offset, "results: page down");
            }
            AppEvent::ScrollToTop => {
                self.scroll_offset = 0;
                tracing::debug!("results: jumped to top");
            }
            AppEvent::ScrollToEnd => {
                self.scroll_offset = self.max_offset();
                tracing::debug!(scroll_offset = self.scroll_offset, "results: jumped to end");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Results<'a> {
    state: &'a ResultsState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Results<'a> {
    pub fn new(state: &'a ResultsState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for Results<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Results").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = content_lines(
            &self.state.content,
            self.state.show_models,
            self.theme,
        );

        let height = inner.height as usize;
        let total = lines.len();
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);
        self.state.last_total.set(total);

        let start = self.state.scroll_offset.min(total.saturating_sub(1));
        let end = (start + height).min(total);

        // Split inner into text (fill) + 1-column scrollbar strip, inside the
        // borders so the track height matches the visible content rows.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines[start..end].to_vec()).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Line building
// ---------------------------------------------------------------------------

fn content_lines(
    content: &ResultsContent,
    show_models: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    match content {
        ResultsContent::Idle => vec![Line::from(Span::styled(
            "enter an error code and press Enter",
            Style::default().add_modifier(Modifier::DIM),
        ))],
        ResultsContent::NotFound(query) => vec![Line::from(Span::styled(
            format!("no results found for error code {query:?}"),
            theme.not_found,
        ))],
        ResultsContent::Groups(groups) => {
            let mut lines = Vec::new();
            for group in groups {
                group_lines(group, show_models, theme, &mut lines);
            }
            lines
        }
    }
}

/// Append the rendered block for one group.
fn group_lines(
    group: &MatchGroup,
    show_models: bool,
    theme: &Theme,
    lines: &mut Vec<Line<'static>>,
) {
    let tier_style = theme.tier_style(group.tier);

    lines.push(Line::from(vec![
        Span::styled(format!("▌ {}", group.key), tier_style),
        Span::styled(
            format!("  ({} record{})", group.details.len(),
                if group.details.len() == 1 { "" } else { "s" }),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]));

    // Success-rate gauge:  [==============------] 73% yellow
    let filled = (group.score as usize * GAUGE_WIDTH) / 100;
    let empty = GAUGE_WIDTH - filled;
    lines.push(Line::from(vec![
        Span::raw("  success rate ["),
        Span::styled("=".repeat(filled), theme.gauge_filled),
        Span::raw("-".repeat(empty)),
        Span::raw("] "),
        Span::styled(format!("{}% {}", group.score, group.tier), tier_style),
    ]));

    push_panel(lines, "Risk Station", &group.risk_station, theme);
    push_panel(lines, "FA by TRC", &group.fa_by_trc, theme);

    for detail in &group.details {
        lines.push(Line::from(Span::styled(
            "  ── details ──".to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )));
        if show_models {
            lines.push(Line::from(vec![
                Span::styled("  Model: ", theme.panel_label),
                Span::raw(detail.model.clone()),
                Span::styled("   Station: ", theme.panel_label),
                Span::raw(detail.station.clone()),
            ]));
        }
        push_panel(lines, "RCA", &detail.rca, theme);
        push_panel(lines, "Counter Action", &detail.counter_action, theme);
    }

    lines.push(Line::default());
}

/// Append a labelled text block, one line per formatted text line.
fn push_panel(lines: &mut Vec<Line<'static>>, label: &str, text: &str, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        format!("  {label}:"),
        theme.panel_label,
    )));
    for row in text.lines() {
        lines.push(Line::from(format!("    {row}")));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
