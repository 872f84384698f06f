//! Ticket text builder
//!
//! Provides a fluent API for building fixed-width ticket text.

/// Fixed-width plain-text builder
///
/// Builds newline-delimited ticket text for raw text printing.
/// Width is in characters.
pub struct TicketBuilder {
    buf: String,
    width: usize,
}

impl TicketBuilder {
    /// Create a new builder with the specified ticket width in characters
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(1024),
            width,
        }
    }

    /// Get the configured ticket width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write text centered within the ticket width
    pub fn center(&mut self, s: &str) -> &mut Self {
        let w = display_width(s);
        if w >= self.width {
            return self.line(s);
        }
        let pad = (self.width - w) / 2;
        self.buf.push_str(&" ".repeat(pad));
        self.line(s)
    }

    /// Print left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned,
    /// with spaces filling the gap.
    pub fn two_col(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = display_width(left);
        let rw = display_width(right);

        if lw + rw >= self.width {
            // Too long, just print with a single space
            self.buf.push_str(left);
            self.buf.push(' ');
            self.line(right);
        } else {
            let spaces = self.width - lw - rw;
            self.buf.push_str(left);
            self.buf.push_str(&" ".repeat(spaces));
            self.line(right);
        }
        self
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn sep_double(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.line(&sep)
    }

    /// Print a line of '-' characters
    pub fn sep_single(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.line(&sep)
    }

    // === Build ===

    /// Build the final ticket text
    pub fn build(self) -> String {
        self.buf
    }
}

/// Display width in character cells
///
/// CJK characters occupy two cells on a text-mode printer.
fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| if (c as u32) > 0x2E7F { 2 } else { 1 })
        .sum()
}
