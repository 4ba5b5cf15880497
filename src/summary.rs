//! Aggregation of classified lines into the share-ready summary.

use serde::Serialize;
use tracing::debug;

use crate::{
    classify::{ClassifiedLine, GENERATOR_LINK, LineClassifier, SOURCE_LINK},
    outcome::Tally,
};

/// The earlier three-part output, for callers that place each piece
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AltTextParts {
    pub preamble: String,
    pub body: String,
    pub link: String,
}

/// Everything gathered from one pasted block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub preamble: Option<String>,
    pub tally: Tally,
    pub unknown_lines: Vec<String>,
    pub result_lines: Vec<String>,
    pub link: Option<String>,
}

impl Summary {
    /// Feed one raw line through the classifier.
    fn absorb(&mut self, classifier: &LineClassifier, raw: &str) {
        match classifier.classify(raw) {
            ClassifiedLine::Preamble => {
                // First preamble wins
                if self.preamble.is_none() {
                    self.preamble = Some(raw.to_string());
                }
            }
            ClassifiedLine::ResultRow(counts) => {
                self.tally.merge(&counts);
                self.result_lines.push(raw.to_string());
            }
            ClassifiedLine::IgnoredLink => {
                if self.link.is_none() {
                    self.link = Some(raw.to_string());
                }
            }
            ClassifiedLine::Unknown => self.unknown_lines.push(raw.to_string()),
            ClassifiedLine::Blank => {}
        }
    }

    pub fn body(&self) -> String {
        self.tally.to_string()
    }

    /// The reconstructed share text with the quick links footer.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(preamble) = &self.preamble {
            parts.push(preamble.clone());
        }

        if !self.tally.is_empty() {
            parts.push(self.body());
        }

        parts.extend(self.unknown_lines.iter().cloned());

        parts.push(String::new());
        parts.push("Quick Links:".to_string());
        parts.push(format!("Clues By Sam: {SOURCE_LINK}"));
        parts.push(format!("Alt For Sam: {GENERATOR_LINK}"));

        if !self.result_lines.is_empty() {
            parts.push(String::new());
            parts.push("Full Results:".to_string());
            parts.extend(self.result_lines.iter().cloned());
        }

        parts.join("\n")
    }

    pub fn parts(&self) -> AltTextParts {
        AltTextParts {
            preamble: self.preamble.clone().unwrap_or_default(),
            body: self.body(),
            link: self
                .link
                .clone()
                .unwrap_or_else(|| SOURCE_LINK.to_string()),
        }
    }
}

/// Split `input` on newlines and fold every line into a fresh [`Summary`].
pub fn summarize(input: &str, classifier: &LineClassifier) -> Summary {
    let summary = input.split('\n').fold(Summary::default(), |mut summary, raw| {
        summary.absorb(classifier, raw);
        summary
    });

    debug!(
        "Summarized {} result rows, {} unknown lines, preamble {}",
        summary.result_lines.len(),
        summary.unknown_lines.len(),
        if summary.preamble.is_some() {
            "found"
        } else {
            "missing"
        }
    );

    summary
}

/// Parse pasted share text into the normalized alt text using strict
/// row detection.
pub fn generate_alt_text(input: &str) -> String {
    summarize(input, &LineClassifier::default()).render()
}
