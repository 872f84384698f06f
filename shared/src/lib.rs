//! Shared types for the print dispatch subsystem
//!
//! Common data model and error/response types used by the renderer,
//! the agent transport client and the dispatch server.

pub mod error;
pub mod models;
pub mod response;

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use models::{LineItem, Order, PrintJob, Printer, TemplateKind};
pub use response::AppResponse;
