use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::classify::RowDetection;

#[derive(Parser, Debug)]
#[command(name = "alt-for-sam", version, about = "Turn pasted Clues by Sam results into readable alt text")]
pub struct Args {
    /// Read share text from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Write the summary to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format for batch mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How result rows are recognised: strict (run of four icons) or permissive (any icon)
    #[arg(long, env = "ALT_FOR_SAM_DETECTION", default_value_t = RowDetection::Strict)]
    pub detection: RowDetection,

    /// Run the interactive terminal UI
    #[arg(long)]
    pub ui: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Reconstructed share text with quick links
    Text,
    /// `{preamble, body, link}` as JSON
    Json,
}
