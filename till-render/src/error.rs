//! Renderer error types

use thiserror::Error;

/// Rendering error
///
/// Raised for malformed input before any formatting happens; a failed
/// render never reaches the network.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Quantity must be positive
    #[error("Invalid quantity {quantity} for item '{item}'")]
    InvalidQuantity { item: String, quantity: i64 },

    /// Unit price must be non-negative
    #[error("Negative unit price {price} for item '{item}'")]
    NegativePrice { item: String, price: i64 },
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
