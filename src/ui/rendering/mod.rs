mod input_field;
mod logs;
mod preview;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(8), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_input(f, left_layout[0]);
        self.draw_copy_bar(f, left_layout[1]);
        self.draw_preview(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }
}
