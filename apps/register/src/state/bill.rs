//! # Bill State
//!
//! The catalog and the bill for the current transaction.
//!
//! ## Ownership
//! The register runs one action to completion before the next one starts,
//! so the bill is owned directly (no `Arc<Mutex<_>>`). Commands borrow it
//! mutably for the duration of a single action.
//!
//! ## Bill Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Register Action          Command                 Bill Change           │
//! │  ───────────────          ───────                 ───────────           │
//! │                                                                         │
//! │  Press "Add" ────────────► add_item() ──────────► merge or push line    │
//! │                                                                         │
//! │  Press "Clear" ──────────► clear_bill() ────────► lines.clear()         │
//! │                                                                         │
//! │  Refresh views ──────────► get_bill() ──────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use supermart_core::{BillLedger, BillSnapshot, Catalog};

/// Catalog plus the live bill.
#[derive(Debug, Clone, Default)]
pub struct BillState {
    catalog: Catalog,
    ledger: BillLedger,
}

impl BillState {
    /// Creates an empty bill over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        BillState {
            catalog,
            ledger: BillLedger::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BillLedger {
        &self.ledger
    }

    /// Splits the borrow so the ledger can be mutated while the catalog is
    /// read.
    pub fn parts_mut(&mut self) -> (&Catalog, &mut BillLedger) {
        (&self.catalog, &mut self.ledger)
    }

    pub fn snapshot(&self) -> BillSnapshot {
        self.ledger.snapshot()
    }
}
