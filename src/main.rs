use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs,
    io::{self, Read, Write},
};
use tracing::{debug, info};

use alt_for_sam::{
    args::{Args, OutputFormat},
    classify::LineClassifier,
    logging::init_logging,
    summary::summarize,
    ui::{CopyTarget, run_ui},
};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging();

    info!("alt-for-sam v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let classifier = LineClassifier::new(args.detection);

    if args.ui {
        return interactive(&args, classifier);
    }

    let input = read_input(&args)?;
    let summary = summarize(&input, &classifier);

    let rendered = match args.format {
        OutputFormat::Text => summary.render(),
        OutputFormat::Json => serde_json::to_string_pretty(&summary.parts())
            .context("Failed to serialize alt text")?,
    };

    write_output(&args, &rendered)
}

fn interactive(args: &Args, classifier: LineClassifier) -> Result<()> {
    let target = match &args.output {
        Some(path) => CopyTarget::File(path.clone()),
        None => CopyTarget::Clipboard,
    };
    let print_on_exit = target == CopyTarget::Clipboard;

    let copied = run_ui(classifier, target)?;

    if print_on_exit {
        if let Some(text) = copied {
            println!("{text}");
        }
    }

    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(args: &Args, rendered: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Alt text written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{rendered}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
