//! # supermart-core: Pure Business Logic for the SuperMart Register
//!
//! This crate is the **heart** of the register. It contains the catalog,
//! the bill ledger and everything needed to render a bill, with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     SuperMart Register Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Register front-end (apps/register)              │   │
//! │  │   name field ──► suggestions ──► quantity ──► Add / Clear       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ supermart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │  │ catalog │ │  money  │ │validation│ │ ledger  │ │ invoice  │ │   │
//! │  │  │ lookup  │ │  Money  │ │  rules   │ │ merge   │ │ layout   │ │   │
//! │  │  │ prefix  │ │ (paise) │ │  order   │ │ totals  │ │          │ │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • INTEGER MONEY                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `CatalogEntry` and `LineItem`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Read-only product table, exact lookup, prefix search
//! - [`validation`] - Ordered boundary checks for add-to-bill input
//! - [`ledger`] - The bill: merge-on-add, clear, totals
//! - [`invoice`] - Fixed-width invoice text
//! - [`autocomplete`] - Suggestion list state for the name field
//! - [`error`] - Domain error types
//!
//! ## Case Policy
//! A product name must match a catalog key exactly to be accepted. Once on
//! the bill, lines are merged by case-insensitive name. Catalog names are
//! unique case-insensitively, so both rules identify the same product.
//!
//! ## Example Usage
//!
//! ```rust
//! use supermart_core::{BillLedger, Catalog, Money};
//!
//! let catalog = Catalog::default();
//! let mut bill = BillLedger::new();
//!
//! bill.add_item(&catalog, "Milk(1L)", "2").unwrap();
//! bill.add_item(&catalog, "Bread", "1").unwrap();
//!
//! assert_eq!(bill.len(), 2);
//! assert_eq!(bill.grand_total(), Money::from_minor(825));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod autocomplete;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use supermart_core::Money` instead of
// `use supermart_core::money::Money`

pub use autocomplete::Autocomplete;
pub use catalog::Catalog;
pub use error::{BillError, CatalogError, CoreError, CoreResult, LineRecordError};
pub use invoice::{Invoice, InvoiceLayout};
pub use ledger::{BillLedger, BillSnapshot, BillTotals};
pub use money::Money;
pub use types::*;
