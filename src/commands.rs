//! Command table construction.
//!
//! Combines the base and per-device command documents into the single
//! resolution table the session consults on every lookup. Merging happens
//! once at startup; the table is immutable afterwards.

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::document::OutputSpec;

/// Merged mapping from exact command string to its output lines.
///
/// Keys are matched case-sensitively against the trimmed input line.
/// Every stored value is a non-empty ordered sequence of lines.
pub type CommandTable = HashMap<String, Vec<String>>;

/// Merges base and override command maps into one resolution table.
///
/// The base map is written first, then the overrides, so a command present
/// in both keeps only the override's normalized value. Overrides are total
/// replacements, never line-level merges. An entry that normalizes to no
/// lines removes the command from the table, so lookups miss it.
pub fn merge_commands(
    base: &HashMap<String, OutputSpec>,
    overrides: &HashMap<String, OutputSpec>,
) -> CommandTable {
    let mut merged = CommandTable::new();
    for source in [base, overrides] {
        for (command, output) in source {
            let lines = normalize(output);
            if lines.is_empty() {
                merged.remove(command);
            } else {
                merged.insert(command.clone(), lines);
            }
        }
    }
    debug!("Merged command table holds {} commands", merged.len());
    merged
}

/// Normalizes a stored output value to an ordered list of lines.
fn normalize(output: &OutputSpec) -> Vec<String> {
    match output {
        OutputSpec::Line(line) => vec![line.clone()],
        OutputSpec::Lines(items) => items.iter().map(value_to_line).collect(),
    }
}

/// String items pass through verbatim; other scalars use their JSON text form.
fn value_to_line(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
