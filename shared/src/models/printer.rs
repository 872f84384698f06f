//! Printer entity
//!
//! Produced fresh on every discovery call. Printers are never cached
//! across calls and have no lifecycle beyond one discovery response.

use serde::{Deserialize, Serialize};

/// A printer reachable through the local print agent
///
/// Identity is the `uri`; `id` is a convenience key unique within one
/// discovery response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Printer {
    pub id: String,
    /// Display name shown to the operator
    pub name: String,
    pub host: String,
    pub port: u16,
    /// Transport protocol: "ipp" | "raw" | "demo"
    #[serde(default = "default_protocol")]
    pub protocol: String,
    /// Fully qualified address used for submission
    pub uri: String,
}

fn default_protocol() -> String {
    "raw".to_string()
}
