//! Print backends
//!
//! "Print this job" has two routes, chosen by deployment topology, not
//! by the caller: forward to a real co-located agent, or answer with a
//! deterministic demo acknowledgment when no hardware is reachable.
//! The choice is made once at startup from [`crate::Config`] and
//! injected as `Arc<dyn PrintBackend>`.

mod demo;
mod local;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use shared::{AppError, AppResult};
use till_agent::AgentError;

pub use demo::DemoBackend;
pub use local::LocalAgentBackend;

/// Result of one dispatch call
///
/// `demo: true` means the content was accepted but no physical printer
/// was invoked; callers must be able to tell this apart from an
/// agent-backed success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintOutcome {
    pub demo: bool,
    pub printer: String,
    pub title: String,
    pub content: String,
}

/// A route to the logical "print this job" action
#[async_trait]
pub trait PrintBackend: Send + Sync {
    /// Submit rendered content to the named printer
    ///
    /// Not idempotent: callers must not retry automatically, a
    /// resubmission prints a duplicate physical ticket.
    async fn submit(
        &self,
        printer_name: &str,
        title: &str,
        content: &str,
    ) -> AppResult<PrintOutcome>;

    /// Backend mode, for health reporting: "agent" | "demo"
    fn mode(&self) -> &'static str;
}

/// Select the backend once from configuration
pub fn from_config(config: &Config) -> anyhow::Result<Arc<dyn PrintBackend>> {
    match &config.agent {
        Some(endpoint) => Ok(Arc::new(LocalAgentBackend::new(endpoint)?)),
        None => Ok(Arc::new(DemoBackend)),
    }
}

/// Map transport-client errors onto HTTP-facing application errors
pub(crate) fn map_agent_error(err: AgentError) -> AppError {
    match err {
        AgentError::Discovery { status } => AppError::AgentRejected {
            status,
            body: "printer discovery failed".to_string(),
        },
        AgentError::Print { status, body } => AppError::AgentRejected { status, body },
        AgentError::PrinterUnavailable { printer } => AppError::PrinterUnavailable(printer),
        AgentError::Http(e) => AppError::AgentUnreachable(e.to_string()),
    }
}
