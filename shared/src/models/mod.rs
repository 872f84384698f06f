//! Data model for print dispatch
//!
//! # Structure
//!
//! - [`order`] - Order and line item snapshots (read-only input)
//! - [`printer`] - Printer entity as reported by a discovery call
//! - [`job`] - Ephemeral print job (one dispatch call)
//! - [`template`] - Ticket template selection

pub mod job;
pub mod order;
pub mod printer;
pub mod template;

pub use job::PrintJob;
pub use order::{LineItem, Order};
pub use printer::Printer;
pub use template::TemplateKind;
