//! # Domain Types
//!
//! Core domain types shared by the catalog and the bill ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐    first add     ┌─────────────────┐               │
//! │  │  CatalogEntry   │ ───────────────► │    LineItem     │               │
//! │  │  ─────────────  │    (snapshot)    │  ─────────────  │               │
//! │  │  name           │                  │  product_name   │               │
//! │  │  unit_price     │                  │  quantity       │               │
//! │  └─────────────────┘                  │  unit_price     │               │
//! │                                       │  subtotal       │               │
//! │                                       └─────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line item copies the product name and unit price at the moment it is
//! first added. Later additions of the same product only change the quantity.

use serde::{Deserialize, Serialize};

use crate::error::{BillError, LineRecordError};
use crate::money::Money;

// =============================================================================
// Catalog Entry
// =============================================================================

/// A purchasable product: display name and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name, unique within the catalog (case-insensitively).
    pub name: String,

    /// Price of one unit.
    pub unit_price: Money,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        CatalogEntry {
            name: name.into(),
            unit_price,
        }
    }

    /// Key used to match bill lines against this product.
    pub fn merge_key(&self) -> String {
        self.name.to_lowercase()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One consolidated bill line for a single product.
///
/// ## Invariants
/// - `quantity > 0`
/// - `subtotal == quantity * unit_price`, always recomputed, never accumulated
///
/// Fields are private so the invariant can only change through
/// [`LineItem::add_quantity`]. Deserialization re-checks both invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord")]
pub struct LineItem {
    product_name: String,
    quantity: i64,
    unit_price: Money,
    subtotal: Money,
}

impl LineItem {
    /// Creates a line from a catalog entry, freezing its name and price.
    pub fn from_entry(entry: &CatalogEntry, quantity: i64) -> Result<Self, BillError> {
        let subtotal = line_amount(entry.unit_price, quantity)?;
        Ok(LineItem {
            product_name: entry.name.clone(),
            quantity,
            unit_price: entry.unit_price,
            subtotal,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Case-insensitive match against a product name.
    pub fn matches(&self, name: &str) -> bool {
        self.product_name.to_lowercase() == name.to_lowercase()
    }

    /// Adds to the quantity and recomputes the subtotal.
    ///
    /// Either both fields change or neither does.
    pub fn add_quantity(&mut self, quantity: i64) -> Result<(), BillError> {
        let new_quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| too_large(quantity))?;
        let new_subtotal = line_amount(self.unit_price, new_quantity)?;

        self.quantity = new_quantity;
        self.subtotal = new_subtotal;
        Ok(())
    }
}

/// Wire shape of a [`LineItem`], checked before it becomes one.
#[derive(Deserialize)]
struct LineItemRecord {
    product_name: String,
    quantity: i64,
    unit_price: Money,
    subtotal: Money,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = LineRecordError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        if record.quantity <= 0 {
            return Err(LineRecordError::NonPositiveQuantity {
                name: record.product_name,
                quantity: record.quantity,
            });
        }

        let Some(expected) = record.unit_price.checked_mul_quantity(record.quantity) else {
            return Err(LineRecordError::AmountOutOfRange {
                name: record.product_name,
            });
        };

        if expected != record.subtotal {
            return Err(LineRecordError::SubtotalMismatch {
                name: record.product_name,
                expected,
                found: record.subtotal,
            });
        }

        Ok(LineItem {
            product_name: record.product_name,
            quantity: record.quantity,
            unit_price: record.unit_price,
            subtotal: record.subtotal,
        })
    }
}

fn line_amount(unit_price: Money, quantity: i64) -> Result<Money, BillError> {
    unit_price
        .checked_mul_quantity(quantity)
        .ok_or_else(|| too_large(quantity))
}

fn too_large(quantity: i64) -> BillError {
    BillError::QuantityTooLarge {
        input: quantity.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
