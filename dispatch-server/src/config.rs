use chrono_tz::Tz;
use till_agent::{AgentEndpoint, DEFAULT_AGENT_PORT};

/// Dispatch server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | TICKET_WIDTH | 48 | Ticket width in characters |
/// | TIMEZONE | Europe/Madrid | Timezone for ticket timestamps |
/// | PRINT_AGENT_HOST | (unset) | Agent host; unset selects the demo backend |
/// | PRINT_AGENT_PORT | 9977 | Agent port |
/// | PRINT_AGENT_SCHEME | http | Agent scheme |
///
/// # Example
///
/// ```ignore
/// PRINT_AGENT_HOST=192.168.1.20 HTTP_PORT=3000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Ticket width in characters (32 for 58mm paper, 48 for 80mm)
    pub ticket_width: usize,
    /// Timezone used when formatting ticket timestamps
    pub timezone: Tz,
    /// Print agent address; `None` means no agent is reachable from
    /// this deployment and jobs get a demo acknowledgment
    pub agent: Option<AgentEndpoint>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let agent = std::env::var("PRINT_AGENT_HOST").ok().map(|host| {
            let scheme =
                std::env::var("PRINT_AGENT_SCHEME").unwrap_or_else(|_| "http".to_string());
            let port = std::env::var("PRINT_AGENT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_AGENT_PORT);
            AgentEndpoint::with_port(scheme, host, port)
        });

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            ticket_width: std::env::var("TICKET_WIDTH")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(48),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Europe::Madrid),
            agent,
        }
    }

    /// Whether this deployment runs without a reachable agent
    pub fn is_demo(&self) -> bool {
        self.agent.is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_demo_backend() {
        // No PRINT_AGENT_HOST in the test environment
        let config = Config {
            http_port: 8080,
            ticket_width: 48,
            timezone: chrono_tz::Europe::Madrid,
            agent: None,
        };
        assert!(config.is_demo());
    }

    #[test]
    fn test_agent_endpoint_uses_well_known_port() {
        let agent = AgentEndpoint::new("http", "192.168.1.20");
        assert_eq!(agent.base_url(), "http://192.168.1.20:9977");
    }
}
