//! Printer directory
//!
//! Presents discovery results to the caller and validates a chosen
//! target before submission. Printers may vanish between discovery and
//! print (unplugged, agent restarted), so a selection is re-validated
//! against the most recent snapshot and fails fast instead of being
//! silently forwarded to the agent.

use tracing::info;

use crate::client::PrintAgent;
use crate::error::{AgentError, AgentResult};
use shared::{PrintJob, Printer};

/// Most recent discovery snapshot plus selection validation
#[derive(Debug, Default)]
pub struct PrinterDirectory {
    printers: Vec<Printer>,
}

impl PrinterDirectory {
    /// Empty directory; every selection is invalid until a refresh
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a fresh discovery result
    pub async fn refresh(&mut self, agent: &dyn PrintAgent) -> AgentResult<&[Printer]> {
        self.printers = agent.discover().await?;
        info!(printers = self.printers.len(), "Printer directory refreshed");
        Ok(&self.printers)
    }

    /// Printers from the latest snapshot
    pub fn printers(&self) -> &[Printer] {
        &self.printers
    }

    /// Validate a selection by printer uri
    ///
    /// Invalid if the uri is empty or absent from the latest snapshot.
    pub fn validate(&self, uri: &str) -> AgentResult<&Printer> {
        if uri.is_empty() {
            return Err(AgentError::PrinterUnavailable {
                printer: "(empty uri)".to_string(),
            });
        }
        self.printers
            .iter()
            .find(|p| p.uri == uri)
            .ok_or_else(|| AgentError::PrinterUnavailable {
                printer: uri.to_string(),
            })
    }

    /// Look up a printer by display name
    pub fn find_by_name(&self, name: &str) -> AgentResult<&Printer> {
        self.printers
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AgentError::PrinterUnavailable {
                printer: name.to_string(),
            })
    }

    /// Validate the job's target, then submit it through the agent
    ///
    /// An invalid selection is rejected before any network call.
    pub async fn dispatch(&self, agent: &dyn PrintAgent, job: &PrintJob) -> AgentResult<()> {
        let printer = self.validate(&job.printer_uri)?;
        agent
            .print_text(&printer.uri, &job.title, &job.content)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<Printer> {
        vec![Printer {
            id: "p1".to_string(),
            name: "Kitchen".to_string(),
            host: "192.168.1.50".to_string(),
            port: 9100,
            protocol: "raw".to_string(),
            uri: "raw://192.168.1.50:9100".to_string(),
        }]
    }

    #[test]
    fn test_validate_known_uri() {
        let dir = PrinterDirectory {
            printers: snapshot(),
        };
        let p = dir.validate("raw://192.168.1.50:9100").unwrap();
        assert_eq!(p.name, "Kitchen");
    }

    #[test]
    fn test_validate_rejects_empty_and_unknown_uri() {
        let dir = PrinterDirectory {
            printers: snapshot(),
        };
        assert!(matches!(
            dir.validate(""),
            Err(AgentError::PrinterUnavailable { .. })
        ));
        assert!(matches!(
            dir.validate("raw://10.0.0.9:9100"),
            Err(AgentError::PrinterUnavailable { .. })
        ));
    }

    #[test]
    fn test_find_by_name() {
        let dir = PrinterDirectory {
            printers: snapshot(),
        };
        assert!(dir.find_by_name("Kitchen").is_ok());
        assert!(dir.find_by_name("Bar").is_err());
    }
}
