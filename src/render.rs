//! Identity placeholder rendering.
//!
//! Output lines and prompt templates may embed the literal tokens
//! `{hostname}`, `{site}`, and `{mgmt_ip}`. The token set is closed and
//! non-recursive, so rendering is a single replace pass per key; no general
//! templating engine is involved.

use crate::context::Context;

/// The closed set of placeholder keys recognized in output and prompts.
pub const PLACEHOLDER_KEYS: &[&str] = &["hostname", "site", "mgmt_ip"];

/// Replaces every occurrence of each placeholder token with its context
/// value.
///
/// Unrecognized `{...}` tokens are left untouched. Substituted values are
/// never rescanned for further placeholders.
pub fn render(value: &str, context: &Context) -> String {
    let mut rendered = value.to_string();
    for key in PLACEHOLDER_KEYS {
        if let Some(replacement) = context.get(key) {
            let token = format!("{{{key}}}");
            rendered = rendered.replace(&token, replacement);
        }
    }
    rendered
}

/// Renders a multi-line command response, joined with newlines.
pub fn render_lines(lines: &[String], context: &Context) -> String {
    lines
        .iter()
        .map(|line| render(line, context))
        .collect::<Vec<_>>()
        .join("\n")
}
