//! Plain-text ticket rendering
//!
//! Turns an order and its line items into printable text for a named
//! template (invoice or kitchen ticket). Rendering is a pure function
//! of its inputs: no printer state is read, no clock is consulted.
//!
//! Output is newline-delimited raw text suitable for text-mode
//! printing; no markup, no control bytes.

mod builder;
mod error;
mod renderer;

pub use builder::TicketBuilder;
pub use error::{RenderError, RenderResult};
pub use renderer::TicketRenderer;
