//! HTTP client for the print agent

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::endpoint::AgentEndpoint;
use crate::error::{AgentError, AgentResult};
use shared::Printer;

/// Discovery response body
///
/// A 2xx body without a `printers` key means "agent reachable, zero
/// printers configured" and decodes to an empty list.
#[derive(Debug, Deserialize)]
struct DiscoveryResponse {
    #[serde(default)]
    printers: Vec<Printer>,
}

/// Print submission body (camelCase on the wire)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrintRequest<'a> {
    printer_uri: &'a str,
    title: &'a str,
    raw_text: &'a str,
}

/// Print agent operations
///
/// Seam between the transport client and code that only needs the two
/// logical operations (server backends, test doubles).
#[async_trait]
pub trait PrintAgent: Send + Sync {
    /// List printers currently reachable by the agent
    async fn discover(&self) -> AgentResult<Vec<Printer>>;

    /// Submit a raw-text job to the printer at `printer_uri`
    ///
    /// No idempotency guarantee: resubmission prints a duplicate
    /// physical ticket.
    async fn print_text(&self, printer_uri: &str, title: &str, raw_text: &str)
    -> AgentResult<()>;
}

/// Network client for a co-located print agent
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: Client,
    base_url: String,
}

impl AgentClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: &AgentEndpoint) -> AgentResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: endpoint.base_url(),
        })
    }

    /// Agent base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PrintAgent for AgentClient {
    #[instrument(skip(self), fields(agent = %self.base_url))]
    async fn discover(&self) -> AgentResult<Vec<Printer>> {
        let url = format!("{}/printers", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::Discovery {
                status: status.as_u16(),
            });
        }

        let body: DiscoveryResponse = response.json().await?;
        debug!(printers = body.printers.len(), "Discovery completed");
        Ok(body.printers)
    }

    #[instrument(skip(self, raw_text), fields(agent = %self.base_url, bytes = raw_text.len()))]
    async fn print_text(
        &self,
        printer_uri: &str,
        title: &str,
        raw_text: &str,
    ) -> AgentResult<()> {
        let url = format!("{}/print", self.base_url);
        let body = PrintRequest {
            printer_uri,
            title,
            raw_text,
        };
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Print {
                status: status.as_u16(),
                body,
            });
        }

        debug!(printer_uri, title, "Print job accepted by agent");
        Ok(())
    }
}
