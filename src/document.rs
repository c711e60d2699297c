//! Declarative command-output documents.
//!
//! Two documents drive a session: a shared base command document and a
//! per-device document holding identity fields plus device-specific command
//! overrides. Both are plain JSON. A missing file behaves as an empty
//! document; a file that does not parse is a fatal startup error.
//!
//! The device document lives at a fixed filename inside a data directory
//! that can be pointed elsewhere through the `DEVICE_DATA_PATH` environment
//! variable.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::SimError;

/// Default location of the shared base command document.
pub const BASE_COMMAND_FILE: &str = "/opt/clisim/commands/base.json";

/// Environment variable naming the device data directory.
pub const DEVICE_DATA_PATH_ENV: &str = "DEVICE_DATA_PATH";

/// Device data directory used when the environment variable is unset.
pub const DEFAULT_DEVICE_DATA_PATH: &str = "/data";

/// Fixed filename of the per-device document inside the data directory.
pub const DEVICE_FILE: &str = "device.json";

/// One command's stored output: a single line or an ordered sequence.
///
/// Sequence items may be any scalar; non-string items are converted to
/// their text form during table normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OutputSpec {
    Line(String),
    Lines(Vec<Value>),
}

/// A parsed command/device document.
///
/// Identity fields are leniently typed: a field that is present but not a
/// string is kept as a raw value and ignored by the context builder, which
/// falls back to its default. Unknown top-level fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Document {
    pub hostname: Option<Value>,
    pub site: Option<Value>,
    pub mgmt_ip: Option<Value>,

    /// Command table contributed by this document.
    #[serde(default)]
    pub commands: HashMap<String, OutputSpec>,
}

impl Document {
    /// Parses a document from JSON text.
    ///
    /// Blank text and a top-level `null` both yield an empty document,
    /// matching how an absent file is treated.
    pub fn from_json(text: &str) -> Result<Document, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Document::default());
        }
        let parsed: Option<Document> = serde_json::from_str(text)?;
        Ok(parsed.unwrap_or_default())
    }

    /// Loads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DocumentRead`] for I/O failures other than a
    /// missing file, and [`SimError::DocumentParse`] for invalid JSON.
    pub fn load(path: &Path) -> Result<Document, SimError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("Document {} not found, treating as empty", path.display());
                return Ok(Document::default());
            }
            Err(err) => {
                return Err(SimError::DocumentRead {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Document::from_json(&text).map_err(|err| SimError::DocumentParse {
            path: path.to_path_buf(),
            source: err,
        })
    }
}

/// Resolves the device data directory from the environment.
pub fn device_data_dir() -> PathBuf {
    env::var_os(DEVICE_DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DEVICE_DATA_PATH))
}
