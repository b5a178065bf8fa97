//! Scenario bar — the strip of demo scenarios at the top of the screen.

use crate::scenarios::Scenario;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line strip of scenarios with the active one highlighted.
/// Keybinding hints are right-aligned in the same row.
pub struct ScenarioBar<'a> {
    scenarios: &'a [Scenario],
    active: usize,
}

impl<'a> ScenarioBar<'a> {
    pub fn new(scenarios: &'a [Scenario], active: usize) -> Self {
        Self { scenarios, active }
    }
}

impl Widget for ScenarioBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = self
            .scenarios
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!(" {}:{} ", i + 1, s.name)))
            .collect();

        Tabs::new(labels)
            .select(self.active)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("")
            .render(area, buf);

        let hint = " ^c:quit  F1:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
