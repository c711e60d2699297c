//! # clisim - Network Device CLI Simulator
//!
//! `clisim` emulates the interactive command-line shell of a network device
//! (router/switch style). It presents a login-shell-like REPL whose output is
//! driven by declarative command-output documents rather than a real network
//! stack, so a user can practice device commands in a training or lab
//! environment without real hardware.
//!
//! ## Features
//!
//! - **Mode State Machine**: Tracks `exec`, `privileged`, and `config` modes
//!   with the usual transition keywords (`enable`, `disable`, `configure
//!   terminal`, `end`, `exit`, `quit`)
//! - **Layered Command Tables**: A shared base document plus per-device
//!   overrides, merged once at startup with overrides taking full precedence
//! - **Identity Templating**: `{hostname}`, `{site}`, and `{mgmt_ip}`
//!   placeholders rendered into prompts and command output
//! - **Testable Core**: The session state machine is driven with plain input
//!   strings and returns reply values, independent of any real line source
//!
//! ## Quick Start
//!
//! ```rust
//! use clisim::commands::merge_commands;
//! use clisim::context::Context;
//! use clisim::document::Document;
//! use clisim::session::{Reply, Session};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let device = Document::from_json(
//!         r#"{"hostname": "lab1", "commands": {"show version": "Router OS 1.0"}}"#,
//!     )?;
//!
//!     let context = Context::from_document(&device);
//!     let table = merge_commands(&Document::default().commands, &device.commands);
//!     let mut session = Session::new(context, table);
//!
//!     assert_eq!(session.prompt(), "lab1>");
//!     match session.handle_line("show version") {
//!         Reply::Output(text) => assert_eq!(text, "Router OS 1.0"),
//!         other => panic!("unexpected reply: {other:?}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Main Components
//!
//! - [`document::Document`] - Declarative command/identity documents
//! - [`context::Context`] - Device identity values used during rendering
//! - [`commands::merge_commands`] - Base + override table merger
//! - [`session::Session`] - The REPL mode state machine
//! - [`error::SimError`] - Fatal startup error types

pub mod commands;
pub mod context;
pub mod document;
pub mod error;
pub mod render;
pub mod session;
