//! Print agent transport client
//!
//! Gives the application a stable way to reach the co-located print
//! agent and exposes the two agent operations:
//!
//! - **discover**: `GET {base}/printers` - list printers the agent can
//!   currently reach
//! - **print**: `POST {base}/print` - submit a raw-text job
//!
//! The agent base address is an explicit [`AgentEndpoint`] constructed
//! once at startup and threaded into the client; there is no ambient
//! global state.
//!
//! Calls are independent single round trips. There is no client-side
//! queue or retry: resubmitting the same content prints a duplicate
//! physical ticket.

mod client;
mod directory;
mod endpoint;
mod error;

pub use client::{AgentClient, PrintAgent};
pub use directory::PrinterDirectory;
pub use endpoint::{AgentEndpoint, DEFAULT_AGENT_PORT};
pub use error::{AgentError, AgentResult};
