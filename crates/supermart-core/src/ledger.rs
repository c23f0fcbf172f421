//! # Bill Ledger
//!
//! The in-memory bill for the current, uncommitted transaction.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Ledger Operations                               │
//! │                                                                         │
//! │  Register Action          Ledger Call             State Change          │
//! │  ───────────────          ───────────             ────────────          │
//! │                                                                         │
//! │  Press "Add" ─────────────► add_item() ──┬──► lines[i].quantity += n    │
//! │                                          │    (same name, any casing)   │
//! │                                          └──► lines.push(new line)      │
//! │                                                                         │
//! │  Press "Clear" ───────────► clear() ────────► lines = []                │
//! │                                                                         │
//! │  Refresh views ───────────► snapshot() ─────► (read only)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product name under case-insensitive comparison
//! - Lines keep first-add order
//! - `grand_total()` is derived from the lines on every read
//! - A failed add leaves the ledger exactly as it was

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::BillError;
use crate::money::Money;
use crate::types::LineItem;
use crate::validation::{validate_add_request, ValidatedLine};

/// Ordered collection of line items plus the time the bill was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillLedger {
    lines: Vec<LineItem>,

    /// When the bill was created or last cleared.
    opened_at: DateTime<Utc>,
}

impl BillLedger {
    /// Creates an empty bill.
    pub fn new() -> Self {
        BillLedger {
            lines: Vec::new(),
            opened_at: Utc::now(),
        }
    }

    /// Validates raw form input and adds it to the bill.
    ///
    /// ## Behavior
    /// - Product already on the bill (case-insensitive): quantity increases
    /// - Otherwise: a new line is appended with the catalog price frozen
    ///
    /// ## Returns
    /// The line that was created or updated.
    ///
    /// ```rust
    /// use supermart_core::{BillLedger, Catalog, Money};
    ///
    /// let catalog = Catalog::default();
    /// let mut bill = BillLedger::new();
    ///
    /// bill.add_item(&catalog, "Apple", "2").unwrap();
    /// let line = bill.add_item(&catalog, "Apple", "2").unwrap();
    ///
    /// assert_eq!(line.quantity(), 4);
    /// assert_eq!(line.subtotal(), Money::from_minor(1000));
    /// assert_eq!(bill.len(), 1);
    /// ```
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        name: &str,
        quantity: &str,
    ) -> Result<&LineItem, BillError> {
        let validated = validate_add_request(catalog, name, quantity)?;
        self.add_validated(validated)
    }

    /// Adds an already-validated request.
    ///
    /// The only failure left at this point is arithmetic overflow, which
    /// surfaces as `QuantityTooLarge` without mutating anything.
    pub fn add_validated(&mut self, request: ValidatedLine<'_>) -> Result<&LineItem, BillError> {
        let entry = request.entry();
        let quantity = request.quantity();

        let position = self.lines.iter().position(|l| l.matches(&entry.name));

        let (candidate, previous_subtotal) = match position {
            Some(i) => {
                let mut line = self.lines[i].clone();
                let previous = line.subtotal();
                line.add_quantity(quantity)?;
                (line, previous)
            }
            None => (LineItem::from_entry(entry, quantity)?, Money::zero()),
        };

        // The bill total must stay representable as well.
        self.grand_total()
            .checked_add(candidate.subtotal() - previous_subtotal)
            .ok_or_else(|| BillError::QuantityTooLarge {
                input: quantity.to_string(),
            })?;

        let index = match position {
            Some(i) => {
                self.lines[i] = candidate;
                i
            }
            None => {
                self.lines.push(candidate);
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[index])
    }

    /// Removes every line and restarts the bill clock.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.opened_at = Utc::now();
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Finds a line by product name, ignoring case.
    pub fn line(&self, name: &str) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.matches(name))
    }

    /// Number of distinct lines (the invoice's "Total items").
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity()).sum()
    }

    /// Sum of all line subtotals.
    pub fn grand_total(&self) -> Money {
        self.lines.iter().map(|l| l.subtotal()).sum()
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Copies the current lines and totals for rendering.
    pub fn snapshot(&self) -> BillSnapshot {
        BillSnapshot::from(self)
    }
}

impl Default for BillLedger {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Snapshot Types
// =============================================================================

/// Bill totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub grand_total: Money,
}

impl From<&BillLedger> for BillTotals {
    fn from(bill: &BillLedger) -> Self {
        BillTotals {
            line_count: bill.len(),
            total_quantity: bill.total_quantity(),
            grand_total: bill.grand_total(),
        }
    }
}

/// Point-in-time copy of the bill, handed to views and the invoice
/// formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillSnapshot {
    pub lines: Vec<LineItem>,
    pub totals: BillTotals,
}

impl From<&BillLedger> for BillSnapshot {
    fn from(bill: &BillLedger) -> Self {
        BillSnapshot {
            lines: bill.lines.clone(),
            totals: BillTotals::from(bill),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogEntry;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::default()
    }

    #[test]
    fn test_add_item() {
        let catalog = catalog();
        let mut bill = BillLedger::new();

        let line = bill.add_item(&catalog, "Apple", "2").unwrap();
        assert_eq!(line.product_name(), "Apple");
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.subtotal(), Money::from_minor(500));

        assert_eq!(bill.len(), 1);
        assert_eq!(bill.grand_total(), Money::from_minor(500));
    }

    /// Adding the same product twice merges into one line.
    #[test]
    fn test_repeated_add_merges() {
        let catalog = catalog();
        let mut bill = BillLedger::new();

        bill.add_item(&catalog, "Apple", "2").unwrap();
        bill.add_item(&catalog, "Apple", "2").unwrap();

        assert_eq!(bill.len(), 1);
        let line = bill.line("Apple").unwrap();
        assert_eq!(line.quantity(), 4);
        assert_eq!(line.subtotal(), Money::from_minor(1000));
        assert_eq!(line.subtotal().to_string(), "10.00");
    }

    #[test]
    fn test_milk_then_bread_scenario() {
        let catalog = catalog();
        let mut bill = BillLedger::new();

        bill.add_item(&catalog, "Milk(1L)", "2").unwrap();
        bill.add_item(&catalog, "Bread", "1").unwrap();

        let lines = bill.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_name(), "Milk(1L)");
        assert_eq!(lines[0].quantity(), 2);
        assert_eq!(lines[0].subtotal(), Money::from_minor(600));
        assert_eq!(lines[1].product_name(), "Bread");
        assert_eq!(lines[1].quantity(), 1);
        assert_eq!(lines[1].subtotal(), Money::from_minor(225));
        assert_eq!(bill.grand_total(), Money::from_minor(825));
    }

    #[test]
    fn test_merge_keeps_first_add_order() {
        let catalog = catalog();
        let mut bill = BillLedger::new();

        bill.add_item(&catalog, "Water Bottle", "1").unwrap();
        bill.add_item(&catalog, "Apple", "1").unwrap();
        bill.add_item(&catalog, "Water Bottle", "5").unwrap();

        let names: Vec<&str> = bill.lines().iter().map(|l| l.product_name()).collect();
        assert_eq!(names, vec!["Water Bottle", "Apple"]);
        assert_eq!(bill.lines()[0].quantity(), 6);
    }

    #[test]
    fn test_boundary_inputs_are_rejected() {
        let catalog = catalog();
        let mut bill = BillLedger::new();

        assert_eq!(
            bill.add_item(&catalog, "Apple", "0").unwrap_err(),
            BillError::NonPositiveQuantity { quantity: 0 }
        );
        assert_eq!(
            bill.add_item(&catalog, "Apple", "-3").unwrap_err(),
            BillError::NonPositiveQuantity { quantity: -3 }
        );
        assert!(matches!(
            bill.add_item(&catalog, "Apple", "abc").unwrap_err(),
            BillError::InvalidQuantityFormat { .. }
        ));
        assert_eq!(
            bill.add_item(&catalog, "", "2").unwrap_err(),
            BillError::MissingInput
        );
        assert!(matches!(
            bill.add_item(&catalog, "Kiwi", "2").unwrap_err(),
            BillError::UnknownProduct { .. }
        ));

        assert!(bill.is_empty());
        assert!(bill.grand_total().is_zero());
    }

    #[test]
    fn test_failed_add_leaves_bill_unchanged() {
        let catalog = catalog();
        let mut bill = BillLedger::new();
        bill.add_item(&catalog, "Bread", "3").unwrap();
        let before = bill.clone();

        let _ = bill.add_item(&catalog, "Bread", "abc");
        let _ = bill.add_item(&catalog, "bread", "1");
        let _ = bill.add_item(&catalog, "Bread", &i64::MAX.to_string());

        assert_eq!(bill, before);
    }

    #[test]
    fn test_grand_total_overflow_is_rejected() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("Gold", Money::from_minor(i64::MAX / 4)),
            CatalogEntry::new("Silver", Money::from_minor(i64::MAX / 4)),
        ])
        .unwrap();
        let mut bill = BillLedger::new();

        bill.add_item(&catalog, "Gold", "3").unwrap();
        let before = bill.clone();

        let err = bill.add_item(&catalog, "Silver", "2").unwrap_err();
        assert!(matches!(err, BillError::QuantityTooLarge { .. }));
        assert_eq!(bill, before);
    }

    #[test]
    fn test_price_is_snapshotted_at_first_add() {
        let cheap = Catalog::new(vec![CatalogEntry::new("Tea", Money::from_minor(100))]).unwrap();
        let dear = Catalog::new(vec![CatalogEntry::new("Tea", Money::from_minor(500))]).unwrap();
        let mut bill = BillLedger::new();

        bill.add_item(&cheap, "Tea", "1").unwrap();
        bill.add_item(&dear, "Tea", "1").unwrap();

        let line = bill.line("tea").unwrap();
        assert_eq!(line.unit_price(), Money::from_minor(100));
        assert_eq!(line.subtotal(), Money::from_minor(200));
    }

    #[test]
    fn test_merge_across_casing_keeps_first_name() {
        let lower = Catalog::new(vec![CatalogEntry::new("Tea", Money::from_minor(100))]).unwrap();
        let upper = Catalog::new(vec![CatalogEntry::new("TEA", Money::from_minor(100))]).unwrap();
        let mut bill = BillLedger::new();

        bill.add_item(&lower, "Tea", "1").unwrap();
        let line = bill.add_item(&upper, "TEA", "2").unwrap();
        assert_eq!(line.product_name(), "Tea");
        assert_eq!(line.quantity(), 3);

        assert_eq!(bill.len(), 1);
        assert_eq!(bill.lines()[0].product_name(), "Tea");
        assert_eq!(bill.grand_total(), Money::from_minor(300));
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut bill = BillLedger::new();

        bill.add_item(&catalog, "Apple", "2").unwrap();
        bill.add_item(&catalog, "Banana", "6").unwrap();
        let opened = bill.opened_at();
        assert!(!bill.is_empty());

        bill.clear();
        assert!(bill.is_empty());
        assert!(bill.lines().is_empty());
        assert_eq!(bill.grand_total(), Money::zero());
        assert_eq!(bill.total_quantity(), 0);
        assert!(bill.opened_at() >= opened);

        // Clearing an empty bill is fine too.
        bill.clear();
        assert!(bill.is_empty());
    }

    #[test]
    fn test_snapshot_totals() {
        let catalog = catalog();
        let mut bill = BillLedger::new();
        bill.add_item(&catalog, "Milk(1L)", "2").unwrap();
        bill.add_item(&catalog, "Bread", "1").unwrap();

        let snapshot = bill.snapshot();
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.totals.line_count, 2);
        assert_eq!(snapshot.totals.total_quantity, 3);
        assert_eq!(snapshot.totals.grand_total, Money::from_minor(825));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["totals"]["grand_total"], 825);
        assert_eq!(json["lines"][0]["product_name"], "Milk(1L)");
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Either the exact catalog name or a re-cased variant of it.
    fn submitted_name(name: &str, casing: u8) -> String {
        match casing % 3 {
            0 => name.to_string(),
            1 => name.to_lowercase(),
            _ => name.to_uppercase(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: line count equals the number of distinct accepted
        /// names, and the grand total equals the sum of quantity × price.
        #[test]
        fn totals_match_accepted_submissions(
            adds in prop::collection::vec((0usize..10, 1i64..1_000, 0u8..3), 0..40)
        ) {
            let catalog = catalog();
            let mut bill = BillLedger::new();

            let mut distinct: Vec<String> = Vec::new();
            let mut expected_total = Money::zero();

            for (idx, qty, casing) in adds {
                let entry = &catalog.entries()[idx];
                let name = submitted_name(&entry.name, casing);

                match bill.add_item(&catalog, &name, &qty.to_string()) {
                    Ok(_) => {
                        let key = name.to_lowercase();
                        if !distinct.contains(&key) {
                            distinct.push(key);
                        }
                        expected_total += entry.unit_price * qty;
                    }
                    Err(err) => {
                        // Only re-cased names may be rejected.
                        prop_assert_ne!(name.as_str(), entry.name.as_str());
                        let is_unknown = matches!(err, BillError::UnknownProduct { .. });
                        prop_assert!(is_unknown);
                    }
                }
            }

            prop_assert_eq!(bill.len(), distinct.len());
            prop_assert_eq!(bill.grand_total(), expected_total);

            for line in bill.lines() {
                prop_assert_eq!(line.subtotal(), line.unit_price() * line.quantity());
                let dupes = bill.lines().iter().filter(|l| l.matches(line.product_name())).count();
                prop_assert_eq!(dupes, 1);
            }
        }

        /// Property: clear always yields an empty bill with a zero total.
        #[test]
        fn clear_always_resets(
            adds in prop::collection::vec((0usize..10, 1i64..100), 0..20)
        ) {
            let catalog = catalog();
            let mut bill = BillLedger::new();

            for (idx, qty) in adds {
                let name = catalog.entries()[idx].name.clone();
                bill.add_item(&catalog, &name, &qty.to_string()).unwrap();
            }

            bill.clear();
            prop_assert!(bill.lines().is_empty());
            prop_assert_eq!(bill.grand_total(), Money::zero());
            prop_assert_eq!(bill.snapshot().totals.line_count, 0);
        }
    }
}
