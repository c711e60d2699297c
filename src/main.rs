use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use log::debug;

use clisim::commands::merge_commands;
use clisim::context::Context;
use clisim::document::{self, Document};
use clisim::session::{Reply, Session};

#[derive(Parser, Debug)]
#[command(
    name = "clisim",
    about = "Serve a Cisco-style login shell backed by canned command output",
    version
)]
struct Args {
    /// Path to the shared base command document
    #[arg(long)]
    base_file: Option<PathBuf>,

    /// Directory holding the device document (overrides DEVICE_DATA_PATH)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base_path = args
        .base_file
        .unwrap_or_else(|| PathBuf::from(document::BASE_COMMAND_FILE));
    let data_dir = args.data_dir.unwrap_or_else(document::device_data_dir);
    let device_path = data_dir.join(document::DEVICE_FILE);

    let base = Document::load(&base_path)
        .with_context(|| format!("load base command document {}", base_path.display()))?;
    let device = Document::load(&device_path)
        .with_context(|| format!("load device document {}", device_path.display()))?;

    let context = Context::from_document(&device);
    let commands = merge_commands(&base.commands, &device.commands);
    debug!(
        "Starting session for {} with {} commands",
        context.hostname,
        commands.len()
    );

    run_loop(Session::new(context, commands))
}

/// Read-evaluate-print loop over stdin/stdout.
///
/// The prompt for the current mode is written before each read, followed by
/// a single space and no newline. End-of-input terminates silently.
fn run_loop(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{} ", session.prompt())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match session.handle_line(&line) {
            Reply::Silent => {}
            Reply::Output(text) => {
                writeln!(stdout, "{text}")?;
                stdout.flush()?;
            }
            Reply::Logout => {
                writeln!(stdout, "logout")?;
                stdout.flush()?;
                return Ok(());
            }
        }
    }
}
