//! Agent-backed print backend
//!
//! Forwards jobs to a real co-located print agent. Discovery runs
//! fresh for every submission; printers are never cached across calls,
//! so a printer unplugged since the operator's last discovery fails
//! fast as unavailable instead of being forwarded blind.

use async_trait::async_trait;
use tracing::{info, instrument};

use super::{PrintBackend, PrintOutcome, map_agent_error};
use shared::{AppResult, PrintJob};
use till_agent::{AgentClient, AgentEndpoint, AgentError, PrinterDirectory};

/// Backend that submits through a local print agent
#[derive(Debug, Clone)]
pub struct LocalAgentBackend {
    agent: AgentClient,
}

impl LocalAgentBackend {
    /// Build a backend for the configured agent endpoint
    pub fn new(endpoint: &AgentEndpoint) -> Result<Self, AgentError> {
        Ok(Self {
            agent: AgentClient::new(endpoint)?,
        })
    }
}

#[async_trait]
impl PrintBackend for LocalAgentBackend {
    #[instrument(skip(self, content), fields(agent = %self.agent.base_url()))]
    async fn submit(
        &self,
        printer_name: &str,
        title: &str,
        content: &str,
    ) -> AppResult<PrintOutcome> {
        let mut directory = PrinterDirectory::new();
        directory
            .refresh(&self.agent)
            .await
            .map_err(map_agent_error)?;

        let printer = directory
            .find_by_name(printer_name)
            .map_err(map_agent_error)?;

        let job = PrintJob::new(&printer.uri, title, content);
        directory
            .dispatch(&self.agent, &job)
            .await
            .map_err(map_agent_error)?;

        info!(printer = %printer.name, uri = %printer.uri, "Job forwarded to agent");

        Ok(PrintOutcome {
            demo: false,
            printer: printer.name.clone(),
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    fn mode(&self) -> &'static str {
        "agent"
    }
}
