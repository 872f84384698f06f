//! Agent client error types

use thiserror::Error;

/// Agent client error
///
/// Transport failures (`Http`) are distinct from a reachable agent
/// answering non-2xx (`Discovery`/`Print`): the first means "start the
/// agent", the second means "the agent refused" - different operator
/// remediation.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Agent answered discovery with a non-success status
    #[error("Discovery failed with HTTP status {status}")]
    Discovery { status: u16 },

    /// Agent rejected a print submission; body is the agent's response
    /// text, surfaced verbatim for operator diagnostics
    #[error("Print rejected with HTTP status {status}: {body}")]
    Print { status: u16, body: String },

    /// Selected printer is not present in the latest discovery result
    #[error("Printer unavailable: {printer}")]
    PrinterUnavailable { printer: String },

    /// Transport-level failure (agent unreachable, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;
