//! # Invoice Commands
//!
//! Renders the "View Bill" tab: invoice text plus the grand total label.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use supermart_core::Invoice;
use tracing::debug;

use crate::state::{BillState, ConfigState};

/// The rendered invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub text: String,
    /// `Grand Total: ₹x.xx`
    pub grand_total_label: String,
}

/// Renders the invoice stamped with the current local time.
pub fn get_invoice(bill: &BillState, config: &ConfigState) -> InvoiceResponse {
    get_invoice_at(bill, config, Local::now().naive_local())
}

/// Renders the invoice stamped with `issued_at`.
pub fn get_invoice_at(
    bill: &BillState,
    config: &ConfigState,
    issued_at: NaiveDateTime,
) -> InvoiceResponse {
    let snapshot = bill.snapshot();
    let layout = config.invoice_layout();
    let invoice = Invoice::new(&snapshot, &layout);

    debug!(line_count = snapshot.totals.line_count, "get_invoice command");

    InvoiceResponse {
        text: invoice.render_at(issued_at),
        grand_total_label: invoice.grand_total_label(),
    }
}
