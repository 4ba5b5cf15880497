use std::time::Instant;

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::COPIED_LABEL};

impl App {
    pub(in crate::ui) fn draw_copy_bar(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let label = self.copy_label(Instant::now());

        let button_style = if label == COPIED_LABEL {
            Style::default().bg(Color::Green).fg(Color::Black)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", label), button_style),
            Span::raw(" Ctrl+Y = copy | Ctrl+Q = quit"),
        ]);

        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Alt Text")),
            area,
        );
    }
}
