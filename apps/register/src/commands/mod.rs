//! # Register Commands
//!
//! Every operation the front-end can request.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── bill.rs     ◄─── Add item, clear, read bill
//! ├── catalog.rs  ◄─── Product listing, suggestions
//! └── invoice.rs  ◄─── Invoice text
//! ```
//!
//! ## State Injection
//! Each command borrows only the state it needs:
//! ```rust,ignore
//! // Only reads the bill
//! fn get_bill(bill: &BillState, config: &ConfigState) -> BillResponse
//!
//! // Mutates the bill
//! fn add_item(bill: &mut BillState, config: &ConfigState, name: &str, quantity: &str)
//!
//! // Only touches the form
//! fn select_suggestion(form: &mut EntryForm, index: usize) -> Option<String>
//! ```
//!
//! Responses are plain `Serialize` structs, so they can be printed as text
//! or handed out as JSON unchanged.

pub mod bill;
pub mod catalog;
pub mod invoice;
