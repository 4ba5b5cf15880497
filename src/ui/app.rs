use std::{
    fmt::Display,
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    classify::LineClassifier,
    summary::{Summary, summarize},
};

use super::{
    handlers::InputHandler,
    types::{COPIED_LABEL, COPY_LABEL, CopyTarget, LogBuffer},
};

const TICK: Duration = Duration::from_millis(250);

/// Main application state container.
pub struct App {
    pub(in crate::ui) classifier: LineClassifier,
    pub(in crate::ui) input: String,
    pub(in crate::ui) summary: Summary,
    pub(in crate::ui) copy_target: CopyTarget,
    pub(in crate::ui) clipboard_out: Box<dyn Write>,
    pub(in crate::ui) copied: Option<String>,
    pub(in crate::ui) copied_until: Option<Instant>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(classifier: LineClassifier, copy_target: CopyTarget, logs: LogBuffer) -> Self {
        Self {
            classifier,
            input: String::new(),
            summary: Summary::default(),
            copy_target,
            clipboard_out: Box::new(io::stdout()),
            copied: None,
            copied_until: None,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!(
            "UI started ({} row detection)",
            self.classifier.detection()
        ));

        loop {
            terminal.draw(|f| self.draw(f))?;

            // Poll with a timeout so the copy label can revert on its own.
            if event::poll(TICK)? && self.handle_event(event::read()?) {
                return Ok(());
            }
        }
    }

    /// Returns true when the user asked to quit.
    pub(in crate::ui) fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => InputHandler::new(self).handle_key(key),
            Event::Paste(text) => {
                InputHandler::new(self).paste(&text);
                false
            }
            _ => false,
        }
    }

    /// The latest copied alt text, if any copy happened.
    pub fn into_copied(self) -> Option<String> {
        self.copied
    }

    pub(in crate::ui) fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Apply an edit to the input and re-summarize it once.
    pub(in crate::ui) fn edit_input(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.input);
        self.summary = summarize(&self.input, &self.classifier);
    }

    #[cfg(test)]
    pub(in crate::ui) fn set_input(&mut self, text: &str) {
        self.edit_input(|input| *input = text.to_string());
    }

    pub(in crate::ui) fn copy_label(&self, now: Instant) -> &'static str {
        match self.copied_until {
            Some(until) if now < until => COPIED_LABEL,
            _ => COPY_LABEL,
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
