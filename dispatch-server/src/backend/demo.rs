//! Demo backend for hosted deployments
//!
//! A cloud-hosted function cannot reach a store's local network, so
//! there is no agent to forward to. The expected, successful answer is
//! a demo acknowledgment carrying the rendered content and an explicit
//! `demo: true` marker; this path never claims a physical print
//! happened and never reports "no agent reachable" as an error.

use async_trait::async_trait;
use tracing::info;

use super::{PrintBackend, PrintOutcome};
use shared::AppResult;

/// Backend that acknowledges jobs without touching hardware
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoBackend;

#[async_trait]
impl PrintBackend for DemoBackend {
    async fn submit(
        &self,
        printer_name: &str,
        title: &str,
        content: &str,
    ) -> AppResult<PrintOutcome> {
        info!(
            printer = printer_name,
            title, "No print agent reachable, returning demo acknowledgment"
        );
        Ok(PrintOutcome {
            demo: true,
            printer: printer_name.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    fn mode(&self) -> &'static str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_submit_is_deterministic_and_flagged() {
        let backend = DemoBackend;
        let a = backend.submit("Kitchen", "Invoice #A-100", "TOTAL 70000\n").await.unwrap();
        let b = backend.submit("Kitchen", "Invoice #A-100", "TOTAL 70000\n").await.unwrap();
        assert!(a.demo);
        assert_eq!(a.content, "TOTAL 70000\n");
        assert_eq!(a.content, b.content);
    }
}
