mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{CopyTarget, LogBuffer};

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::classify::LineClassifier;

/// Entry point for running the UI. Returns the last copied alt text.
pub fn run_ui(classifier: LineClassifier, copy_target: CopyTarget) -> Result<Option<String>> {
    let logs = LogBuffer::new();

    let mut app = App::new(classifier, copy_target, logs);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result.map(|()| app.into_copied())
}
