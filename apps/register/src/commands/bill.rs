//! # Bill Commands
//!
//! Commands that read or change the current bill.
//!
//! ## Bill Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_item    ┌──────────┐   get_invoice   ┌──────────┐  │
//! │  │  Empty   │──────────────►│  Open    │────────────────►│ Invoice  │  │
//! │  │  Bill    │               │  Bill    │◄──── add_item   │  Text    │  │
//! │  └──────────┘               └──────────┘                 └──────────┘  │
//! │       ▲                          │                                      │
//! │       └──────── clear_bill ──────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use supermart_core::{BillSnapshot, BillTotals, Money};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{BillState, ConfigState};

/// One row of the live item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRow {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub subtotal: Money,
    /// Subtotal with currency symbol, as shown in the list.
    pub subtotal_display: String,
}

/// Bill totals for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTotalsDto {
    pub line_count: usize,
    pub total_quantity: i64,
    pub grand_total: Money,
}

impl From<BillTotals> for BillTotalsDto {
    fn from(totals: BillTotals) -> Self {
        BillTotalsDto {
            line_count: totals.line_count,
            total_quantity: totals.total_quantity,
            grand_total: totals.grand_total,
        }
    }
}

/// Bill response including rows and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub items: Vec<BillRow>,
    pub totals: BillTotalsDto,
    /// `Current Total: ₹x.xx`
    pub current_total_label: String,
}

impl BillResponse {
    pub fn from_snapshot(snapshot: &BillSnapshot, config: &ConfigState) -> Self {
        let items = snapshot
            .lines
            .iter()
            .map(|line| BillRow {
                name: line.product_name().to_string(),
                quantity: line.quantity(),
                unit_price: line.unit_price(),
                subtotal: line.subtotal(),
                subtotal_display: config.format_currency(line.subtotal().minor_units()),
            })
            .collect();

        BillResponse {
            items,
            totals: snapshot.totals.into(),
            current_total_label: format!(
                "Current Total: {}",
                config.format_currency(snapshot.totals.grand_total.minor_units())
            ),
        }
    }
}

/// Gets the current bill contents.
pub fn get_bill(bill: &BillState, config: &ConfigState) -> BillResponse {
    debug!("get_bill command");
    BillResponse::from_snapshot(&bill.snapshot(), config)
}

/// Adds raw form input to the bill.
///
/// ## Behavior
/// - Product already on the bill: quantity increases
/// - Product not on the bill: added as a new line with the catalog price
/// - Any validation failure: bill unchanged, error returned
///
/// ## Returns
/// Updated bill with all rows and totals
pub fn add_item(
    bill: &mut BillState,
    config: &ConfigState,
    name: &str,
    quantity: &str,
) -> Result<BillResponse, ApiError> {
    debug!(name = %name, quantity = %quantity, "add_item command");

    let (catalog, ledger) = bill.parts_mut();
    match ledger.add_item(catalog, name, quantity) {
        Ok(line) => {
            debug!(
                name = %line.product_name(),
                quantity = line.quantity(),
                subtotal = %line.subtotal(),
                "line updated"
            );
        }
        Err(err) => {
            debug!(error = %err, "add_item rejected");
            return Err(err.into());
        }
    }

    let response = get_bill(bill, config);
    debug!(line_count = response.totals.line_count, "bill updated");
    Ok(response)
}

/// Clears all lines from the bill.
///
/// ## Returns
/// Empty bill
pub fn clear_bill(bill: &mut BillState, config: &ConfigState) -> BillResponse {
    debug!("clear_bill command");

    let (_, ledger) = bill.parts_mut();
    ledger.clear();

    get_bill(bill, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (BillState, ConfigState) {
        (BillState::default(), ConfigState::default())
    }

    #[test]
    fn test_add_item_returns_updated_bill() {
        let (mut bill, config) = setup();

        let response = add_item(&mut bill, &config, "Milk(1L)", "2").unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Milk(1L)");
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.items[0].subtotal_display, "₹6.00");
        assert_eq!(response.current_total_label, "Current Total: ₹6.00");

        let response = add_item(&mut bill, &config, "Bread", "1").unwrap();
        assert_eq!(response.totals.line_count, 2);
        assert_eq!(response.totals.grand_total, Money::from_minor(825));
        assert_eq!(response.current_total_label, "Current Total: ₹8.25");
    }

    #[test]
    fn test_add_item_error_codes() {
        let (mut bill, config) = setup();

        let cases = [
            ("", "2", ErrorCode::MissingInput),
            ("Kiwi", "2", ErrorCode::UnknownProduct),
            ("Apple", "abc", ErrorCode::InvalidQuantityFormat),
            ("Apple", "0", ErrorCode::NonPositiveQuantity),
            ("Apple", "-3", ErrorCode::NonPositiveQuantity),
        ];

        for (name, qty, code) in cases {
            let err = add_item(&mut bill, &config, name, qty).unwrap_err();
            assert_eq!(err.code, code, "{name:?} / {qty:?}");
        }

        assert!(get_bill(&bill, &config).items.is_empty());
    }

    #[test]
    fn test_clear_bill() {
        let (mut bill, config) = setup();
        add_item(&mut bill, &config, "Apple", "2").unwrap();

        let response = clear_bill(&mut bill, &config);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.grand_total, Money::zero());
        assert_eq!(response.current_total_label, "Current Total: ₹0.00");
    }

    #[test]
    fn test_bill_response_json() {
        let (mut bill, config) = setup();
        let response = add_item(&mut bill, &config, "Apple", "4").unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["name"], "Apple");
        assert_eq!(json["items"][0]["unitPrice"], 250);
        assert_eq!(json["items"][0]["subtotal"], 1000);
        assert_eq!(json["totals"]["grandTotal"], 1000);
        assert_eq!(json["totals"]["lineCount"], 1);
        assert_eq!(json["totals"]["totalQuantity"], 4);
        assert!(json["totals"].get("grand_total").is_none());
        assert_eq!(json["currentTotalLabel"], "Current Total: ₹10.00");
    }
}
