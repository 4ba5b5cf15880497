//! Copying the generated alt text out of the UI.

use std::{fs, time::Instant};

use anyhow::{Context, Result};
use crossterm::{clipboard::CopyToClipboard, execute};

use super::super::{
    app::App,
    types::{COPY_FEEDBACK, CopyTarget},
};

/// Helper struct for the copy action and its button feedback.
pub struct CopyHandler<'a> {
    app: &'a mut App,
}

impl<'a> CopyHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Hand the current alt text to the copy target. Empty input is a no-op.
    pub fn copy(&mut self, now: Instant) -> Result<()> {
        if self.app.input.trim().is_empty() {
            self.app.log("Nothing to copy");
            return Ok(());
        }

        let text = self.app.summary().render();

        match &self.app.copy_target {
            CopyTarget::File(path) => {
                fs::write(path, &text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!("Alt text written to {}", path.display());
            }
            CopyTarget::Clipboard => {
                execute!(
                    self.app.clipboard_out,
                    CopyToClipboard::to_clipboard_from(text.as_str())
                )
                .context("Failed to send alt text to the clipboard")?;
                tracing::info!("Alt text sent to clipboard ({} bytes)", text.len());
            }
        }

        self.app.copied = Some(text);
        self.app.copied_until = Some(now + COPY_FEEDBACK);
        self.app.log("Alt text copied");

        Ok(())
    }
}
