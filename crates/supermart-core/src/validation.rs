//! # Validation Module
//!
//! Boundary checks applied to raw form input before the bill is touched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Register front-end                                           │
//! │  └── Collects raw text from the name and quantity fields               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trims both fields                                                 │
//! │  ├── Resolves the product against the catalog                          │
//! │  └── Parses and range-checks the quantity                              │
//! │           │  ValidatedLine (only constructible here)                    │
//! │           ▼                                                             │
//! │  Layer 3: BillLedger::add_validated                                    │
//! │  └── Never sees invalid input                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use supermart_core::validation::validate_add_request;
//! use supermart_core::{BillError, Catalog};
//!
//! let catalog = Catalog::default();
//! let line = validate_add_request(&catalog, " Bread ", "2").unwrap();
//! assert_eq!(line.entry().name, "Bread");
//! assert_eq!(line.quantity(), 2);
//!
//! assert_eq!(
//!     validate_add_request(&catalog, "Bread", "0").unwrap_err(),
//!     BillError::NonPositiveQuantity { quantity: 0 }
//! );
//! ```

use std::num::IntErrorKind;

use crate::catalog::Catalog;
use crate::error::BillError;
use crate::types::CatalogEntry;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, BillError>;

// =============================================================================
// Validated Line
// =============================================================================

/// An add-to-bill request that passed every boundary check.
///
/// Holds the resolved catalog entry, so the unit price the ledger snapshots
/// is the catalog's price at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedLine<'a> {
    entry: &'a CatalogEntry,
    quantity: i64,
}

impl<'a> ValidatedLine<'a> {
    pub fn entry(&self) -> &'a CatalogEntry {
        self.entry
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

// =============================================================================
// Request Validator
// =============================================================================

/// Validates raw name and quantity text for an add-to-bill request.
///
/// ## Rules (in order, first failure wins)
/// 1. Both fields non-empty after trimming → else `MissingInput`
/// 2. Name is an exact catalog key → else `UnknownProduct`
/// 3. Quantity parses as an integer → else `InvalidQuantityFormat`
///    (`QuantityTooLarge` if it is an integer that overflows `i64`)
/// 4. Quantity > 0 → else `NonPositiveQuantity`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cashier presses "Add"                                                  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_add_request(catalog, "Apple", "abc") ← THIS FUNCTION          │
/// │       │                                                                 │
/// │       ├── Err(InvalidQuantityFormat) → warning, bill unchanged          │
/// │       │                                                                 │
/// │       └── Ok(ValidatedLine) → BillLedger::add_validated                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_add_request<'a>(
    catalog: &'a Catalog,
    raw_name: &str,
    raw_quantity: &str,
) -> ValidationResult<ValidatedLine<'a>> {
    let name = raw_name.trim();
    let quantity_text = raw_quantity.trim();

    if name.is_empty() || quantity_text.is_empty() {
        return Err(BillError::MissingInput);
    }

    let entry = catalog
        .lookup(name)
        .ok_or_else(|| BillError::UnknownProduct {
            name: name.to_string(),
        })?;

    let quantity = validate_quantity_text(quantity_text)?;

    Ok(ValidatedLine { entry, quantity })
}

// =============================================================================
// Quantity Validators
// =============================================================================

/// Parses quantity text as a signed integer.
///
/// ## Rules
/// - Optional `+` or `-` sign followed by ASCII digits
/// - Single underscores may separate digits (`1_000`)
/// - Anything else (decimals, letters, inner spaces, non-ASCII digits) is
///   `InvalidQuantityFormat`
/// - Positive values beyond `i64::MAX` are `QuantityTooLarge`
/// - Negative values beyond `i64::MIN` saturate, so they still fail as
///   non-positive
///
/// ```rust
/// use supermart_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("+5"), Ok(5));
/// assert_eq!(parse_quantity("-3"), Ok(-3));
/// assert_eq!(parse_quantity("1_000"), Ok(1000));
/// assert!(parse_quantity("2.5").is_err());
/// ```
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let digits = strip_digit_separators(text).ok_or_else(|| BillError::InvalidQuantityFormat {
        input: text.to_string(),
    })?;

    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => BillError::QuantityTooLarge {
            input: text.to_string(),
        },
        IntErrorKind::NegOverflow => BillError::NonPositiveQuantity { quantity: i64::MIN },
        _ => BillError::InvalidQuantityFormat {
            input: text.to_string(),
        },
    })
}

/// Removes `_` digit separators.
///
/// Returns `None` if an underscore is leading, trailing, doubled or next to
/// the sign.
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }

    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let grouped = body
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));

    grouped.then(|| text.replace('_', ""))
}

/// Validates a parsed quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity <= 0 {
        return Err(BillError::NonPositiveQuantity { quantity });
    }

    Ok(quantity)
}

/// Parses then validates quantity text in one step.
pub fn validate_quantity_text(text: &str) -> ValidationResult<i64> {
    parse_quantity(text).and_then(validate_quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let catalog = Catalog::default();
        let line = validate_add_request(&catalog, "Milk(1L)", "2").unwrap();
        assert_eq!(line.entry().name, "Milk(1L)");
        assert_eq!(line.quantity(), 2);
    }

    #[test]
    fn test_request_trims_both_fields() {
        let catalog = Catalog::default();
        let line = validate_add_request(&catalog, "  Water Bottle\t", " 3 ").unwrap();
        assert_eq!(line.entry().name, "Water Bottle");
        assert_eq!(line.quantity(), 3);
    }

    #[test]
    fn test_missing_input() {
        let catalog = Catalog::default();
        assert_eq!(
            validate_add_request(&catalog, "", "2").unwrap_err(),
            BillError::MissingInput
        );
        assert_eq!(
            validate_add_request(&catalog, "Apple", "").unwrap_err(),
            BillError::MissingInput
        );
        assert_eq!(
            validate_add_request(&catalog, "   ", "   ").unwrap_err(),
            BillError::MissingInput
        );
    }

    #[test]
    fn test_unknown_product() {
        let catalog = Catalog::default();
        assert_eq!(
            validate_add_request(&catalog, "Kiwi", "2").unwrap_err(),
            BillError::UnknownProduct {
                name: "Kiwi".to_string()
            }
        );
        // Lookup is exact: casing must match the catalog.
        assert!(matches!(
            validate_add_request(&catalog, "apple", "2").unwrap_err(),
            BillError::UnknownProduct { .. }
        ));
    }

    #[test]
    fn test_unknown_product_wins_over_bad_quantity() {
        let catalog = Catalog::default();
        assert!(matches!(
            validate_add_request(&catalog, "Kiwi", "abc").unwrap_err(),
            BillError::UnknownProduct { .. }
        ));
    }

    #[test]
    fn test_missing_input_wins_over_unknown_product() {
        let catalog = Catalog::default();
        assert_eq!(
            validate_add_request(&catalog, "Kiwi", "").unwrap_err(),
            BillError::MissingInput
        );
    }

    #[test]
    fn test_quantity_format() {
        let catalog = Catalog::default();
        for bad in ["abc", "2.5", "1e3", "2 3", "0x10", "--1", "_1", "1_", "1__0", "+_1", "\u{0663}"] {
            assert_eq!(
                validate_add_request(&catalog, "Apple", bad).unwrap_err(),
                BillError::InvalidQuantityFormat {
                    input: bad.to_string()
                },
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let catalog = Catalog::default();
        assert_eq!(
            validate_add_request(&catalog, "Apple", "0").unwrap_err(),
            BillError::NonPositiveQuantity { quantity: 0 }
        );
        assert_eq!(
            validate_add_request(&catalog, "Apple", "-3").unwrap_err(),
            BillError::NonPositiveQuantity { quantity: -3 }
        );
    }

    #[test]
    fn test_parse_quantity_signs_and_overflow() {
        assert_eq!(parse_quantity("+7"), Ok(7));
        assert_eq!(parse_quantity("007"), Ok(7));
        assert_eq!(parse_quantity("1_000"), Ok(1000));
        assert_eq!(parse_quantity("-2_5"), Ok(-25));
        assert!(matches!(
            parse_quantity("9_999_999_999_999_999_999"),
            Err(BillError::QuantityTooLarge { .. })
        ));
        assert!(matches!(
            parse_quantity("99999999999999999999"),
            Err(BillError::QuantityTooLarge { .. })
        ));
        assert_eq!(
            validate_quantity_text("-99999999999999999999"),
            Err(BillError::NonPositiveQuantity { quantity: i64::MIN })
        );
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1), Ok(1));
        assert_eq!(validate_quantity(999), Ok(999));
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }
}
