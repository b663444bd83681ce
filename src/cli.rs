//! Command-line argument parsing for the replay binary
//!
//! The binary loads a file, then replays a move script through the engine
//! and prints every highlight change. Script lines:
//! - `LINE:COL` - move the cursor (1-indexed, like editor status bars)
//! - `+LINE:COL` - move caused by an edit
//! - `!toggle` / `!clear` - run a command (`!auto-highlight:toggle` also works)
//! - blank lines and `#` comments are skipped

use clap::Parser;
use std::path::PathBuf;

use crate::commands::CommandId;
use crate::messages::Msg;
use crate::model::{Document, Position};

/// Replay cursor moves through the auto-highlight engine
#[derive(Parser, Debug)]
#[command(
    name = "auto-highlight",
    version,
    about = "Replay cursor moves through the auto-highlight engine"
)]
pub struct CliArgs {
    /// File to load into the editor
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Move script (reads stdin when omitted)
    #[arg(short = 'm', long, value_name = "SCRIPT")]
    pub moves: Option<PathBuf>,

    /// Config file (defaults to the user config)
    #[arg(short = 'c', long, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Print notifications as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// One replay step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Move the cursor to a 0-indexed position
    Move {
        position: Position,
        text_changed: bool,
    },
    /// Invoke a command
    Command(CommandId),
}

impl ScriptStep {
    /// Apply the step's cursor move to `document` and build the message for it
    pub fn into_msg(self, document: &mut Document) -> Msg {
        match self {
            ScriptStep::Move {
                position,
                text_changed,
            } => {
                let old = document.set_cursor(position);
                Msg::CursorMoved {
                    old,
                    new: position,
                    text_changed,
                }
            }
            ScriptStep::Command(id) => Msg::Command(id),
        }
    }
}

/// Parse a move script into steps
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, String> {
    script
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(parse_step(line).map_err(|e| format!("line {}: {}", idx + 1, e)))
            }
        })
        .collect()
}

fn parse_step(line: &str) -> Result<ScriptStep, String> {
    if let Some(name) = line.strip_prefix('!') {
        let id = CommandId::from_name(name)
            .or_else(|| CommandId::from_name(&format!("auto-highlight:{}", name)))
            .ok_or_else(|| format!("unknown command '{}'", name))?;
        return Ok(ScriptStep::Command(id));
    }

    let (text_changed, position) = match line.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let (row, column) = position
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{}'", line))?;
    let row: usize = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid line number '{}'", row))?;
    let column: usize = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", column))?;

    // Convert from 1-indexed (user input) to 0-indexed (internal)
    Ok(ScriptStep::Move {
        position: Position::new(row.saturating_sub(1), column.saturating_sub(1)),
        text_changed,
    })
}
