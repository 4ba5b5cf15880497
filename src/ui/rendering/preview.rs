//! Live preview of the generated alt text.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_preview(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let summary = self.summary();
        let rendered = summary.render();

        let lines: Vec<Line> = rendered
            .split('\n')
            .map(|l| {
                if l == "Quick Links:" || l == "Full Results:" {
                    Line::from(Span::styled(
                        l.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(l.to_string())
                }
            })
            .collect();

        let counts: String = summary
            .tally
            .iter()
            .map(|(kind, count)| format!(" {}{}", kind.glyph(), count))
            .collect();

        let title = format!(
            "Preview | {} rows{} | {} unrecognised",
            summary.result_lines.len(),
            counts,
            summary.unknown_lines.len()
        );

        let border_color = if summary.unknown_lines.is_empty() {
            Color::White
        } else {
            Color::Yellow
        };

        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            ),
            area,
        );
    }
}
