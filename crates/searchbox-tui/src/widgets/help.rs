//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `F1`; close with `F1` or `Escape`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup;

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        const BINDINGS: &[(&str, &str)] = &[
            ("any character", "Type into the search box"),
            ("Backspace", "Delete the last character"),
            ("Esc", "Clear the query"),
            ("←  /  →", "Select a filter chip"),
            ("Delete", "Remove the selected chip"),
            ("Ctrl+f", "Open the filter picker"),
            ("PageDown / Ctrl+n", "Next scenario"),
            ("PageUp  /  Ctrl+p", "Previous scenario"),
            ("F1", "Toggle this help popup"),
            ("Ctrl+c", "Quit"),
        ];

        let popup = centered_rect(64, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" searchbox — keybindings (F1 to close) ")
            .border_style(Style::default().add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
