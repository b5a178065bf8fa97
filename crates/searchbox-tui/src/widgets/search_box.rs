//! Search box widget — query input line plus a row of filter chips.
//!
//! ```text
//! ┌ With filters ──────────────────────────────┐
//! │ > sampler                        esc:clear │
//! │  Sampling 5 ×   Image 3 ×   Advanced 12 ×  │
//! └────────────────────────────────────────────┘
//! ```
//!
//! The placeholder is shown dimmed while the query is empty, and the clear
//! hint only while it is not.

use crate::session::Session;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const PROMPT: &str = "> ";
const CLEAR_HINT: &str = "esc:clear";

pub struct SearchBox<'a> {
    session: &'a Session,
    theme: &'a Theme,
}

impl<'a> SearchBox<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    /// Absolute terminal position of the text cursor (end of the query).
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let col = (PROMPT.len() + self.session.controller.query().chars().count()) as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.session.scenario.title))
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let c = &self.session.controller;
        let query = c.query();

        // Input line
        let input = if query.is_empty() {
            Line::from(vec![
                Span::raw(PROMPT),
                Span::styled(self.session.scenario.placeholder, self.theme.placeholder),
            ])
        } else {
            Line::from(vec![
                Span::raw(PROMPT),
                Span::styled(query, self.theme.input_text),
            ])
        };
        let input_row = Rect { height: 1, ..inner };
        Paragraph::new(input).render(input_row, buf);

        if c.is_clearable() {
            let x = inner.right().saturating_sub(CLEAR_HINT.len() as u16);
            buf.set_string(x, inner.y, CLEAR_HINT, self.theme.clear_hint);
        }

        // Chip rows
        let filters = c.filters();
        if filters.is_empty() || inner.height < 2 {
            return;
        }
        let mut spans = Vec::with_capacity(filters.len() * 4);
        for (i, f) in filters.iter().enumerate() {
            let chip = if i == self.session.selected_chip {
                self.theme.chip_selected
            } else {
                self.theme.chip
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", f.label), chip));
            spans.push(Span::styled(
                format!("{} ", f.badge_count),
                chip.patch(self.theme.badge_style(&f.badge_class)),
            ));
            spans.push(Span::styled("× ", chip));
        }
        let chips_area = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .render(chips_area, buf);
    }
}
