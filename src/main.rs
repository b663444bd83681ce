//! Replay host for the auto-highlight engine
//!
//! Loads a file, replays a cursor move script against it, and prints every
//! `did-change-highlight` notification.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::Read;

use auto_highlight::cli::{parse_script, CliArgs};
use auto_highlight::model::{Document, Keyword, StatusBarItem};
use auto_highlight::update::update;
use auto_highlight::{HighlightConfig, HighlightEngine, Msg};

#[derive(Serialize)]
struct Notification<'a> {
    event: &'static str,
    keywords: &'a [Keyword],
}

fn print_notification(keywords: &[Keyword], json: bool) {
    if json {
        let notification = Notification {
            event: "did-change-highlight",
            keywords,
        };
        match serde_json::to_string(&notification) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!("Failed to serialize notification: {}", e),
        }
    } else {
        let words: Vec<&str> = keywords.iter().map(Keyword::as_str).collect();
        println!("did-change-highlight: [{}]", words.join(", "));
    }
}

fn read_script(args: &CliArgs) -> Result<String> {
    match &args.moves {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read move script {}", path.display())),
        None => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read move script from stdin")?;
            Ok(script)
        }
    }
}

fn main() -> Result<()> {
    auto_highlight::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => HighlightConfig::load_from(path),
        None => HighlightConfig::load(),
    };

    let mut document = Document::from_file(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    tracing::info!(
        file = %args.file.display(),
        language = document.language().display_name(),
        lines = document.line_count(),
        "Loaded document"
    );
    let steps = parse_script(&read_script(&args)?).map_err(anyhow::Error::msg)?;

    let mut engine = HighlightEngine::new(config);
    let json = args.json;
    engine.subscribe(move |keywords| print_notification(keywords, json))?;

    let status_bar = StatusBarItem::attach(engine.channel())?;

    for step in steps {
        let msg = step.into_msg(&mut document);
        let outcome = update(&mut engine, &document, msg)?;
        tracing::debug!(
            ?outcome,
            status = %status_bar.status().display_text(),
            "step done"
        );
    }

    status_bar.detach();
    engine.deactivate()?;
    Ok(())
}
