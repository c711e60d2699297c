//! Error types for simulator startup.
//!
//! Only document loading can fail. Everything the user types during a
//! session is handled by the state machine and answered with a deterministic
//! message, so there are no runtime error variants.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading command and device documents.
#[derive(Error, Debug)]
pub enum SimError {
    /// The document exists but could not be read.
    ///
    /// A document that is simply absent is not an error; it behaves as an
    /// empty document. This variant covers permission problems and other
    /// I/O failures on a file that is present.
    #[error("failed to read document {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document was read but is not valid JSON.
    ///
    /// This aborts startup before the session loop begins.
    #[error("failed to parse document {path}: {source}")]
    DocumentParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
