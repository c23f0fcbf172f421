//! # State Module
//!
//! State owned by the register for the lifetime of the process.
//!
//! ## Why Multiple State Types?
//! Each piece has a single responsibility, and each command borrows only
//! the pieces it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  BillState   │  │  EntryForm   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Catalog     │  │  name text   │  │  store_name      │              │
//! │  │  BillLedger  │  │  qty text    │  │  currency        │              │
//! │  │              │  │  suggestions │  │  invoice strings │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  All three are owned by `Register`. There are no globals and nothing  │
//! │  survives a restart.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod bill;
mod config;
mod form;

pub use bill::BillState;
pub use config::ConfigState;
pub use form::EntryForm;
