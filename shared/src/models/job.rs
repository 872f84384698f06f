//! Ephemeral print job

use serde::{Deserialize, Serialize};

/// A print job, alive for the duration of one dispatch call
///
/// Not queued, not retried, no identity beyond the request.
/// Resubmitting the same content prints a duplicate physical ticket,
/// so callers must never retry automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJob {
    pub printer_uri: String,
    pub title: String,
    /// Rendered template text, newline-delimited, no markup
    pub content: String,
}

impl PrintJob {
    pub fn new(
        printer_uri: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            printer_uri: printer_uri.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
