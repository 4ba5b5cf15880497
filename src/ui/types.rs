use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

pub const MAX_LOG_LINES: usize = 300;

/// How long the copy button reads "Copied!" after a successful copy.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap();
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Where copied alt text ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    /// Overwrite this file on every copy.
    File(PathBuf),
    /// Set the system clipboard through the terminal (OSC 52). The latest
    /// copy is also printed once the UI exits, for terminals that ignore it.
    Clipboard,
}
