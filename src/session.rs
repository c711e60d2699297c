//! Session state machine for the emulated login shell.
//!
//! The session tracks a single mutable value, the current mode, and turns
//! each input line into a reply: nothing, rendered output, or a logout.
//! Mode never filters which commands resolve; it affects only the prompt
//! and the meaning of the transition keywords.
//!
//! The machine is driven directly with input strings, so it can be tested
//! without a real line source.

use std::collections::HashMap;

use log::trace;
use once_cell::sync::Lazy;

use crate::commands::CommandTable;
use crate::context::Context;
use crate::render::{render, render_lines};

/// Fixed response for input that resolves to no command.
pub const INVALID_INPUT: &str = "% Invalid input detected at '^' marker.";

/// Privilege/configuration level of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// User EXEC mode, the initial level.
    Exec,
    /// Privileged EXEC mode, entered with `enable`.
    Privileged,
    /// Global configuration mode, entered with `configure terminal`.
    Config,
}

/// Per-mode prompt templates; the hostname placeholder is rendered on
/// every loop pass.
static PROMPT_TEMPLATES: Lazy<HashMap<Mode, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Mode::Exec, "{hostname}>"),
        (Mode::Privileged, "{hostname}#"),
        (Mode::Config, "{hostname}(config)#"),
    ])
});

/// What the caller should do with one handled input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to display: blank input or a pure mode transition.
    Silent,
    /// Rendered command output or the invalid-input message.
    Output(String),
    /// Display the literal line `logout` and terminate the session.
    Logout,
}

/// A single interactive session over an immutable command table.
pub struct Session {
    mode: Mode,
    context: Context,
    commands: CommandTable,
}

impl Session {
    /// Creates a session in EXEC mode.
    pub fn new(context: Context, commands: CommandTable) -> Session {
        Session {
            mode: Mode::Exec,
            context,
            commands,
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Renders the prompt for the current mode.
    pub fn prompt(&self) -> String {
        let template = PROMPT_TEMPLATES
            .get(&self.mode)
            .copied()
            .unwrap_or("{hostname}>");
        render(template, &self.context)
    }

    /// Handles one raw input line and returns what to display.
    ///
    /// Transition keywords are checked first, in priority order. A keyword
    /// typed in a mode where it does not apply falls through to command
    /// resolution and is answered like any other lookup.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = line.trim();
        if command.is_empty() {
            return Reply::Silent;
        }
        trace!("Handling line {:?} in mode {:?}", command, self.mode);

        match command {
            "exit" | "quit" => {
                return match self.mode {
                    Mode::Config => self.transition(Mode::Privileged),
                    Mode::Privileged => self.transition(Mode::Exec),
                    Mode::Exec => Reply::Logout,
                };
            }
            "enable" if self.mode == Mode::Exec => {
                return self.transition(Mode::Privileged);
            }
            "disable" if matches!(self.mode, Mode::Privileged | Mode::Config) => {
                return self.transition(Mode::Exec);
            }
            "configure" | "configure terminal" if self.mode == Mode::Privileged => {
                return self.transition(Mode::Config);
            }
            "end" if self.mode == Mode::Config => {
                return self.transition(Mode::Privileged);
            }
            _ => {}
        }

        self.resolve(command)
    }

    fn transition(&mut self, to: Mode) -> Reply {
        trace!("Mode transition {:?} -> {:?}", self.mode, to);
        self.mode = to;
        Reply::Silent
    }

    /// Looks the trimmed line up in the command table, mode-independently.
    fn resolve(&self, command: &str) -> Reply {
        match self.commands.get(command) {
            Some(lines) => Reply::Output(render_lines(lines, &self.context)),
            None => Reply::Output(INVALID_INPUT.to_string()),
        }
    }
}
