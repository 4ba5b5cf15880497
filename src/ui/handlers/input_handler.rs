//! Keyboard and paste handling.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app::App;
use super::CopyHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('y' | 'Y'), KeyModifiers::CONTROL) => {
                if let Err(e) = CopyHandler::new(self.app).copy(Instant::now()) {
                    self.app.log(format!("Copy failed: {e:#}"));
                }
            }

            (KeyCode::Char('l' | 'L'), KeyModifiers::CONTROL) => {
                self.app.log("Input cleared");
                self.app.edit_input(String::clear);
            }

            (KeyCode::Enter, _) => self.app.edit_input(|input| input.push('\n')),
            (KeyCode::Backspace, _) => self.app.edit_input(|input| {
                input.pop();
            }),
            (KeyCode::Char(c), _) => self.app.edit_input(|input| input.push(c)),
            _ => {}
        }
        false
    }

    /// Bracketed paste arrives in one piece; terminals may send `\r\n`.
    pub fn paste(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.app.edit_input(|input| input.push_str(&normalized));
        self.app
            .log(format!("Pasted {} lines", normalized.lines().count()));
    }
}
