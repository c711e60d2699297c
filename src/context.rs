//! Device identity context.
//!
//! A small fixed set of identity values derived from the device document.
//! Built once at startup, read-only for the life of the session, and
//! consulted on every placeholder substitution.

use serde_json::Value;

use crate::document::Document;

/// Hostname used when the device document does not provide one.
pub const DEFAULT_HOSTNAME: &str = "sim-router";

/// Site label used when the device document does not provide one.
pub const DEFAULT_SITE: &str = "LAB";

/// Management address used when the device document does not provide one.
pub const DEFAULT_MGMT_IP: &str = "10.0.0.1";

/// Identity values substituted into prompts and command output.
///
/// All three fields are always populated; absent or non-string source
/// fields fall back to their defaults, so building a context never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub hostname: String,
    pub site: String,
    pub mgmt_ip: String,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            hostname: DEFAULT_HOSTNAME.to_string(),
            site: DEFAULT_SITE.to_string(),
            mgmt_ip: DEFAULT_MGMT_IP.to_string(),
        }
    }
}

impl Context {
    /// Builds the context from a device document.
    pub fn from_document(doc: &Document) -> Context {
        Context {
            hostname: string_or(&doc.hostname, DEFAULT_HOSTNAME),
            site: string_or(&doc.site, DEFAULT_SITE),
            mgmt_ip: string_or(&doc.mgmt_ip, DEFAULT_MGMT_IP),
        }
    }

    /// Returns the value for one of the three placeholder keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "hostname" => Some(&self.hostname),
            "site" => Some(&self.site),
            "mgmt_ip" => Some(&self.mgmt_ip),
            _ => None,
        }
    }
}

/// Extracts a string field, falling back when absent or not a string.
fn string_or(value: &Option<Value>, default: &str) -> String {
    value
        .as_ref()
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}
