//! Agent address configuration

/// Well-known port the print agent listens on
///
/// The agent is co-located with the host running the UI, so host plus
/// this fixed port is enough to find it on any deployment.
pub const DEFAULT_AGENT_PORT: u16 = 9977;

/// Explicit agent address: scheme, host and port
///
/// Built once at startup (typically from configuration or from the
/// serving page's scheme and hostname) and passed into
/// [`crate::AgentClient`].
#[derive(Debug, Clone)]
pub struct AgentEndpoint {
    /// "http" or "https"; matches the scheme the page is served over
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl AgentEndpoint {
    /// Endpoint on the well-known agent port
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self::with_port(scheme, host, DEFAULT_AGENT_PORT)
    }

    /// Endpoint with an explicit port
    pub fn with_port(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// Fully qualified base URL, no trailing slash, no path prefix
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
