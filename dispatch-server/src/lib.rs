//! Dispatch Server - hosted ingress for print jobs
//!
//! Accepts print requests from the web client when the deployment has
//! no direct route from the browser to a local print agent (hosted /
//! serverless mode).
//!
//! # Module structure
//!
//! ```text
//! dispatch-server/src/
//! ├── config/       # Environment-driven configuration
//! ├── backend/      # PrintBackend trait + demo/agent variants
//! ├── api/          # HTTP routes and handlers
//! └── logger/       # Logging setup
//! ```
//!
//! The backend (real agent vs demo acknowledgment) is selected once at
//! startup from configuration and injected into the router state; the
//! handlers never inspect the environment themselves.

pub mod api;
pub mod backend;
pub mod config;
pub mod logger;

// Re-export public types
pub use api::{AppState, router};
pub use backend::{DemoBackend, LocalAgentBackend, PrintBackend, PrintOutcome};
pub use config::Config;
