//! Ticket renderer
//!
//! Renders order data into plain-text tickets for the two supported
//! layouts. Kitchen tickets never carry pricing; invoices always carry
//! a grand total recomputed from unit prices.

use chrono_tz::Tz;
use tracing::warn;

use crate::builder::TicketBuilder;
use crate::error::{RenderError, RenderResult};
use shared::{LineItem, Order, TemplateKind};

/// Ticket renderer
///
/// Pure and deterministic: output depends only on the order, its items
/// and the template kind. Timestamps come from the order itself, never
/// from the wall clock.
#[derive(Debug, Clone)]
pub struct TicketRenderer {
    width: usize,
    timezone: Tz,
}

impl TicketRenderer {
    /// Create a new renderer with specified ticket width and timezone
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize, timezone: Tz) -> Self {
        Self { width, timezone }
    }

    /// Render an order for the requested template
    ///
    /// A pre-supplied `override_content` is passed through unchanged
    /// (operator layout override); input validation still runs first so
    /// malformed orders are rejected before any submission.
    pub fn render(
        &self,
        order: &Order,
        items: &[LineItem],
        kind: TemplateKind,
        override_content: Option<&str>,
    ) -> RenderResult<String> {
        self.validate(items)?;

        if let Some(content) = override_content {
            return Ok(content.to_string());
        }

        let rendered = match kind {
            TemplateKind::Invoice => self.render_invoice(order, items),
            TemplateKind::Kitchen => self.render_kitchen(order, items),
        };

        Ok(rendered)
    }

    /// Reject malformed line items before any formatting
    fn validate(&self, items: &[LineItem]) -> RenderResult<()> {
        for item in items {
            if item.quantity <= 0 {
                return Err(RenderError::InvalidQuantity {
                    item: item.name.clone(),
                    quantity: item.quantity,
                });
            }
            if item.unit_price < 0 {
                return Err(RenderError::NegativePrice {
                    item: item.name.clone(),
                    price: item.unit_price,
                });
            }
        }
        Ok(())
    }

    /// Invoice layout: items with prices plus a recomputed grand total
    fn render_invoice(&self, order: &Order, items: &[LineItem]) -> String {
        let mut b = TicketBuilder::new(self.width);

        b.center("INVOICE");
        b.center(&format!("#{}", order.number));
        self.render_meta(&mut b, order);
        b.sep_double();

        if items.is_empty() {
            b.center("(no items)");
        }

        let mut grand_total: i64 = 0;
        for item in items {
            let total = item.computed_total();
            if !item.reconciles() {
                // Stale client-side totals are a data-quality issue,
                // not fatal; the recomputed value wins
                warn!(
                    item = %item.name,
                    declared = item.line_total,
                    computed = total,
                    "Line total mismatch, using recomputed value"
                );
            }
            grand_total += total;

            let left = format!(
                "{} x{} @ {}",
                item.name,
                item.quantity,
                format_money(item.unit_price)
            );
            b.two_col(&left, &format_money(total));
        }

        b.sep_single();
        b.two_col("TOTAL", &format_money(grand_total));
        b.sep_double();

        b.build()
    }

    /// Kitchen layout: names and quantities only, never prices
    fn render_kitchen(&self, order: &Order, items: &[LineItem]) -> String {
        let mut b = TicketBuilder::new(self.width);

        b.center("KITCHEN ORDER");
        b.center(&format!("#{}", order.number));
        self.render_meta(&mut b, order);
        b.sep_double();

        if items.is_empty() {
            b.center("(no items)");
        }

        for item in items {
            b.line(&format!("{} x{}", item.name, item.quantity));
            if let Some(note) = item.note.as_deref()
                && !note.is_empty()
            {
                b.line(&format!("  * {}", note));
            }
        }

        b.build()
    }

    /// Shared header lines: table name and timestamp, when present
    fn render_meta(&self, b: &mut TicketBuilder, order: &Order) {
        if let Some(table) = order.table_name.as_deref()
            && !table.is_empty()
        {
            b.center(table);
        }
        if let Some(ts) = order.created_at {
            b.center(&format_timestamp(ts, self.timezone));
        }
    }
}

impl Default for TicketRenderer {
    fn default() -> Self {
        Self::new(48, chrono_tz::Europe::Madrid)
    }
}

/// Format a minor-unit currency amount
///
/// Amounts stay in minor units on the ticket; the surrounding
/// application decides the currency.
fn format_money(v: i64) -> String {
    v.to_string()
}

/// Format unix timestamp (millis) to MM-DD HH:mm:ss in given timezone
fn format_timestamp(ts: i64, tz: Tz) -> String {
    if let Some(dt) = chrono::DateTime::from_timestamp_millis(ts) {
        dt.with_timezone(&tz).format("%m-%d %H:%M:%S").to_string()
    } else {
        "unknown time".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order() -> Order {
        Order {
            id: 1,
            number: "A-100".to_string(),
            table_name: None,
            created_at: None,
        }
    }

    fn test_items() -> Vec<LineItem> {
        vec![
            LineItem {
                item_id: 1,
                name: "Tea".to_string(),
                quantity: 2,
                unit_price: 10000,
                line_total: 20000,
                note: None,
            },
            LineItem {
                item_id: 2,
                name: "Cake".to_string(),
                quantity: 1,
                unit_price: 50000,
                line_total: 50000,
                note: None,
            },
        ]
    }

    fn render(kind: TemplateKind, items: &[LineItem]) -> String {
        TicketRenderer::default()
            .render(&test_order(), items, kind, None)
            .unwrap()
    }

    #[test]
    fn test_invoice_grand_total() {
        let out = render(TemplateKind::Invoice, &test_items());
        assert!(out.contains("INVOICE"));
        assert!(out.contains("#A-100"));
        assert!(out.contains("TOTAL"));
        assert!(out.contains("70000"));
    }

    #[test]
    fn test_invoice_total_is_order_independent() {
        let mut reversed = test_items();
        reversed.reverse();
        let a = render(TemplateKind::Invoice, &test_items());
        let b = render(TemplateKind::Invoice, &reversed);
        assert!(a.contains("70000"));
        assert!(b.contains("70000"));
    }

    #[test]
    fn test_invoice_recomputes_stale_totals() {
        let mut items = test_items();
        // Stale client-side total; renderer must not trust it
        items[0].line_total = 1;
        let out = render(TemplateKind::Invoice, &items);
        assert!(out.contains("70000"));
    }

    #[test]
    fn test_kitchen_exact_item_lines() {
        let out = render(TemplateKind::Kitchen, &test_items());
        let sep = "=".repeat(48);
        let body = out.split(&sep).nth(1).expect("separator present");
        let lines: Vec<&str> = body.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Tea x2", "Cake x1"]);
    }

    #[test]
    fn test_kitchen_never_contains_prices() {
        let out = render(TemplateKind::Kitchen, &test_items());
        for token in ["10000", "50000", "70000", "@", "price", "Price", "TOTAL", "total"] {
            assert!(!out.contains(token), "kitchen ticket leaked {:?}:\n{}", token, out);
        }
    }

    #[test]
    fn test_kitchen_prints_item_notes() {
        let mut items = test_items();
        items[0].note = Some("no sugar".to_string());
        let out = render(TemplateKind::Kitchen, &items);
        assert!(out.contains("  * no sugar"));
    }

    #[test]
    fn test_empty_items_render_placeholder() {
        for kind in [TemplateKind::Invoice, TemplateKind::Kitchen] {
            let out = render(kind, &[]);
            assert!(!out.is_empty());
            assert!(out.contains("(no items)"));
        }
    }

    #[test]
    fn test_invalid_quantity_is_rejected() {
        let mut items = test_items();
        items[0].quantity = -1;
        let err = TicketRenderer::default()
            .render(&test_order(), &items, TemplateKind::Invoice, None)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidQuantity { quantity: -1, .. }));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut items = test_items();
        items[1].unit_price = -500;
        let err = TicketRenderer::default()
            .render(&test_order(), &items, TemplateKind::Kitchen, None)
            .unwrap_err();
        assert!(matches!(err, RenderError::NegativePrice { price: -500, .. }));
    }

    #[test]
    fn test_override_content_passes_through_unchanged() {
        let out = TicketRenderer::default()
            .render(
                &test_order(),
                &test_items(),
                TemplateKind::Invoice,
                Some("CUSTOM LAYOUT\n"),
            )
            .unwrap();
        assert_eq!(out, "CUSTOM LAYOUT\n");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let order = Order {
            table_name: Some("Table 5".to_string()),
            created_at: Some(1705912335000),
            ..test_order()
        };
        let r = TicketRenderer::default();
        let a = r.render(&order, &test_items(), TemplateKind::Invoice, None).unwrap();
        let b = r.render(&order, &test_items(), TemplateKind::Invoice, None).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("Table 5"));
        assert!(a.contains("01-22"));
    }
}
