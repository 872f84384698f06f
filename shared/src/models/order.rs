//! Order snapshot types
//!
//! The dispatch subsystem treats orders as read-only input: it renders
//! them into printable text but never mutates them.

use serde::{Deserialize, Serialize};

/// Order metadata, as submitted with a print request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Human-facing order number (e.g. "A-100")
    pub number: String,
    /// Table name, printed on tickets when present
    #[serde(default)]
    pub table_name: Option<String>,
    /// Creation time as unix millis; rendered in the ticket header.
    /// Carried with the order so rendering stays deterministic.
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// A single order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub item_id: i64,
    pub name: String,
    /// Must be positive; validated before rendering
    pub quantity: i64,
    /// Minor currency units, must be non-negative
    pub unit_price: i64,
    /// Expected to equal unit_price * quantity. A mismatch is a
    /// data-quality warning, not fatal; the recomputed value wins.
    pub line_total: i64,
    /// Free-form kitchen note ("no peanuts")
    #[serde(default)]
    pub note: Option<String>,
}

impl LineItem {
    /// Recomputed line total; never trusts the upstream `line_total`
    pub fn computed_total(&self) -> i64 {
        self.unit_price * self.quantity
    }

    /// Whether the upstream total reconciles with the recomputed one
    pub fn reconciles(&self) -> bool {
        self.line_total == self.computed_total()
    }
}
