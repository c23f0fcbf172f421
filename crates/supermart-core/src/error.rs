//! # Error Types
//!
//! Domain-specific error types for supermart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  supermart-core errors (this file)                                     │
//! │  ├── CoreError     - Umbrella for everything below                     │
//! │  ├── BillError     - Rejected add-to-bill input (user-correctable)     │
//! │  └── CatalogError  - Malformed catalog table                           │
//! │                                                                         │
//! │  register app errors (separate crate)                                  │
//! │  └── ApiError      - What the shell shows as a notice                  │
//! │                                                                         │
//! │  Flow: BillError → CoreError → ApiError → Notice                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of a `BillError` IS the message shown to the cashier
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Bill Error
// =============================================================================

/// Input rejected at the add-to-bill boundary.
///
/// Every variant is recoverable: the bill is left untouched and the cashier
/// corrects the input and resubmits.
///
/// ## Check Order (first failure wins)
/// ```text
/// name / quantity empty?      ──► MissingInput
/// name not in catalog?        ──► UnknownProduct
/// quantity not an integer?    ──► InvalidQuantityFormat
/// quantity <= 0?              ──► NonPositiveQuantity
/// arithmetic out of range?    ──► QuantityTooLarge
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillError {
    /// Product name or quantity field is empty.
    #[error("Please fill in item name and quantity.")]
    MissingInput,

    /// Product name does not match any catalog entry.
    #[error("{name} is not in our product database.")]
    UnknownProduct { name: String },

    /// Quantity text is not a whole number.
    #[error("Quantity must be a whole number.")]
    InvalidQuantityFormat { input: String },

    /// Quantity is zero or negative.
    #[error("Quantity must be a positive integer.")]
    NonPositiveQuantity { quantity: i64 },

    /// Quantity (or the resulting line amount) does not fit the ledger's
    /// fixed-point range.
    #[error("Quantity {input} is too large.")]
    QuantityTooLarge { input: String },
}

impl BillError {
    /// Heading for the warning notice shown to the cashier.
    pub fn title(&self) -> &'static str {
        match self {
            BillError::UnknownProduct { .. } => "Product Not Found",
            BillError::MissingInput
            | BillError::InvalidQuantityFormat { .. }
            | BillError::NonPositiveQuantity { .. }
            | BillError::QuantityTooLarge { .. } => "Input Error",
        }
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// A catalog table that breaks the catalog invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog entry has an empty name")]
    EmptyName,

    #[error("catalog entry '{name}' must have a positive price")]
    NonPositivePrice { name: String },

    /// Two names that differ only by case. The bill merges lines
    /// case-insensitively, so they would collapse into one line.
    #[error("catalog entry '{name}' duplicates '{existing}'")]
    DuplicateName { name: String, existing: String },
}

// =============================================================================
// Line Record Error
// =============================================================================

/// A serialized line item whose fields disagree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRecordError {
    #[error("line '{name}' has non-positive quantity {quantity}")]
    NonPositiveQuantity { name: String, quantity: i64 },

    #[error("line '{name}' amount is out of range")]
    AmountOutOfRange { name: String },

    #[error("line '{name}' subtotal {found} does not equal quantity x price ({expected})")]
    SubtotalMismatch {
        name: String,
        expected: Money,
        found: Money,
    },
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for callers that handle both families at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Bill(#[from] BillError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
