//! # Invoice Formatter
//!
//! Renders a bill snapshot as fixed-width invoice text.
//!
//! ## Layout
//! ```text
//! --- Supermarket Invoice ---
//!
//! Date: 2026-10-17 18:42:07
//! --------------------------------------------------
//! Item                Qty     Price     Subtotal
//! --------------------------------------------------
//! Milk(1L)            2       3.00      6.00
//! Bread               1       2.25      2.25
//! --------------------------------------------------
//! Total items: 2
//! Amount Payable: ₹8.25
//!
//! Thank you for shopping with us! Visit again!
//! ```
//!
//! Column widths are 20 / 8 / 10 / 10, left-aligned. Longer names are not
//! truncated, so they push the rest of the row to the right.
//!
//! Output is a pure function of the snapshot, the layout and the timestamp.
//! Only [`Invoice::render_now`] reads the clock.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ledger::BillSnapshot;

/// Width of the horizontal rules.
pub const RULE_WIDTH: usize = 50;

/// Text shown instead of an invoice when the bill is empty.
pub const EMPTY_BILL_NOTICE: &str = "No items added yet. Add items in the 'Add items' tab.";

/// `strftime` pattern for the invoice date line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAME_WIDTH: usize = 20;
const QTY_WIDTH: usize = 8;
const PRICE_WIDTH: usize = 10;
const SUBTOTAL_WIDTH: usize = 10;

// =============================================================================
// Layout
// =============================================================================

/// The fixed strings around the invoice table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLayout {
    /// First line of the invoice.
    pub title: String,

    /// Prefix for payable amounts.
    pub currency_symbol: String,

    /// Courtesy line printed last.
    pub closing_line: String,
}

impl Default for InvoiceLayout {
    fn default() -> Self {
        InvoiceLayout {
            title: "--- Supermarket Invoice ---".to_string(),
            currency_symbol: "₹".to_string(),
            closing_line: "Thank you for shopping with us! Visit again!".to_string(),
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A bill snapshot paired with the layout to print it in.
#[derive(Debug, Clone, Copy)]
pub struct Invoice<'a> {
    snapshot: &'a BillSnapshot,
    layout: &'a InvoiceLayout,
}

impl<'a> Invoice<'a> {
    pub fn new(snapshot: &'a BillSnapshot, layout: &'a InvoiceLayout) -> Self {
        Invoice { snapshot, layout }
    }

    /// Renders the invoice stamped with `issued_at`.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use supermart_core::{BillLedger, Catalog, Invoice, InvoiceLayout};
    ///
    /// let catalog = Catalog::default();
    /// let mut bill = BillLedger::new();
    /// bill.add_item(&catalog, "Bread", "1").unwrap();
    ///
    /// let snapshot = bill.snapshot();
    /// let layout = InvoiceLayout::default();
    /// let at = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();
    ///
    /// let text = Invoice::new(&snapshot, &layout).render_at(at);
    /// assert!(text.contains("Date: 2026-01-02 03:04:05\n"));
    /// assert!(text.contains("Amount Payable: ₹2.25\n"));
    /// ```
    pub fn render_at(&self, issued_at: NaiveDateTime) -> String {
        InvoiceText {
            invoice: *self,
            issued_at,
        }
        .to_string()
    }

    /// Renders the invoice stamped with the current local time.
    pub fn render_now(&self) -> String {
        self.render_at(Local::now().naive_local())
    }

    /// The `Grand Total: ₹x.xx` label shown beside the invoice.
    pub fn grand_total_label(&self) -> String {
        format!(
            "Grand Total: {}",
            self.snapshot
                .totals
                .grand_total
                .with_symbol(&self.layout.currency_symbol)
        )
    }
}

/// Display adapter that does the actual writing.
struct InvoiceText<'a> {
    invoice: Invoice<'a>,
    issued_at: NaiveDateTime,
}

impl fmt::Display for InvoiceText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.invoice.snapshot;
        let layout = self.invoice.layout;

        if snapshot.lines.is_empty() {
            return writeln!(f, "{EMPTY_BILL_NOTICE}");
        }

        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "{}", layout.title)?;
        writeln!(f)?;
        writeln!(f, "Date: {}", self.issued_at.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<NAME_WIDTH$}{:<QTY_WIDTH$}{:<PRICE_WIDTH$}{:<SUBTOTAL_WIDTH$}",
            "Item", "Qty", "Price", "Subtotal"
        )?;
        writeln!(f, "{rule}")?;

        for line in &snapshot.lines {
            writeln!(
                f,
                "{:<NAME_WIDTH$}{:<QTY_WIDTH$}{:<PRICE_WIDTH$}{:<SUBTOTAL_WIDTH$}",
                line.product_name(),
                line.quantity(),
                line.unit_price(),
                line.subtotal()
            )?;
        }

        writeln!(f, "{rule}")?;
        writeln!(f, "Total items: {}", snapshot.totals.line_count)?;
        writeln!(
            f,
            "Amount Payable: {}",
            snapshot
                .totals
                .grand_total
                .with_symbol(&layout.currency_symbol)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", layout.closing_line)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
