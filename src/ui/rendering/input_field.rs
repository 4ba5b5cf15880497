//! Share text input pane.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let text = format!("{}▌", self.input);
        let all_lines: Vec<&str> = text.split('\n').collect();

        // Keep the cursor line in view
        let height = area.height.saturating_sub(2) as usize;
        let start = all_lines.len().saturating_sub(height);

        let lines: Vec<Line> = all_lines[start..]
            .iter()
            .map(|l| Line::from(l.to_string()))
            .collect();

        let border_color = if self.input.trim().is_empty() {
            Color::Gray
        } else {
            Color::Green
        };

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title("Paste results | Enter = newline | Ctrl+L = clear"),
            ),
            area,
        );
    }
}
