//! Action panel — scenario description, counters, simulated results and the
//! newest-first action log.

use crate::{action_log::ActionLog, session::Session, theme::Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct ActionPanel<'a> {
    session: &'a Session,
    log: &'a ActionLog,
    theme: &'a Theme,
}

impl<'a> ActionPanel<'a> {
    pub fn new(session: &'a Session, log: &'a ActionLog, theme: &'a Theme) -> Self {
        Self { session, log, theme }
    }
}

impl Widget for ActionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Actions ")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let s = self.session;
        let dim = Style::default().add_modifier(Modifier::DIM);

        let mut lines = vec![
            Line::from(Span::styled(s.scenario.description, dim)),
            Line::from(vec![
                Span::raw("debounce: "),
                Span::styled(
                    format!("{}ms", s.controller.debounce().as_millis()),
                    self.theme.log_counter,
                ),
                Span::raw("  searches: "),
                Span::styled(s.search_count.to_string(), self.theme.log_counter),
                Span::raw("  cleared: "),
                Span::styled(s.clear_count.to_string(), self.theme.log_counter),
            ]),
            Line::default(),
        ];

        if !s.results.is_empty() {
            lines.push(Line::from(Span::styled(
                "Search results:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.extend(s.results.iter().map(|r| Line::from(format!(" • {r}"))));
            lines.push(Line::default());
        }

        if !self.log.is_empty() {
            lines.push(Line::from(Span::styled(
                "Actions log:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.extend(
                self.log
                    .entries()
                    .map(|e| Line::from(Span::styled(e.to_string(), self.theme.log_entry))),
            );
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
