pub mod args;
pub mod classify;
pub mod logging;
pub mod outcome;
pub mod summary;
#[cfg(test)]
mod test_support;
pub mod ui;

pub use classify::{ClassifiedLine, LineClassifier, RowDetection};
pub use outcome::{OutcomeKind, Tally};
pub use summary::{AltTextParts, Summary, generate_alt_text, summarize};
