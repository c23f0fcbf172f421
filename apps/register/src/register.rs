//! # Register Controller
//!
//! Owns all register state and turns cashier actions into command calls.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cashier action            Handler               State touched         │
//! │  ─────────────             ───────               ─────────────         │
//! │  types in name field  ──►  type_name         ──► form + suggestions    │
//! │  types in qty field   ──►  type_quantity     ──► form                  │
//! │  picks a suggestion   ──►  select_suggestion ──► form                  │
//! │  presses "Add"        ──►  submit_add        ──► bill, then form       │
//! │  presses "Clear"      ──►  clear_bill        ──► bill + form           │
//! │  opens "View Bill"    ──►  invoice_text      ──► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures never leave the register half-updated: a rejected add keeps
//! both fields as typed so the cashier can correct them.

use serde::Serialize;
use supermart_core::Catalog;
use tracing::info;

use crate::commands::{bill, catalog, invoice};
use crate::error::ApiError;
use crate::state::{BillState, ConfigState, EntryForm};

/// Severity of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
}

/// A message shown to the cashier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<ApiError> for Notice {
    fn from(err: ApiError) -> Self {
        Notice::warning(err.title, err.message)
    }
}

/// The register: catalog, open bill, entry form and settings.
#[derive(Debug, Clone)]
pub struct Register {
    bill: BillState,
    form: EntryForm,
    config: ConfigState,
}

impl Default for Register {
    fn default() -> Self {
        Register::new(Catalog::default(), ConfigState::default())
    }
}

impl Register {
    pub fn new(catalog: Catalog, config: ConfigState) -> Self {
        Register {
            bill: BillState::new(catalog),
            form: EntryForm::new(),
            config,
        }
    }

    pub fn bill(&self) -> &BillState {
        &self.bill
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Name field changed.
    pub fn type_name(&mut self, text: &str) -> catalog::SuggestionResponse {
        catalog::suggest_products(&self.bill, &mut self.form, text)
    }

    /// Quantity field changed.
    pub fn type_quantity(&mut self, text: &str) {
        self.form.set_quantity(text);
    }

    /// Suggestion clicked. `index` is zero-based.
    pub fn select_suggestion(&mut self, index: usize) -> Option<String> {
        catalog::select_suggestion(&mut self.form, index)
    }

    /// "Add to Bill" pressed.
    ///
    /// On success both fields are emptied and the refreshed bill returned.
    /// On failure the form and bill are left as they were.
    pub fn submit_add(&mut self) -> Result<bill::BillResponse, Notice> {
        let response = bill::add_item(
            &mut self.bill,
            &self.config,
            &self.form.name,
            &self.form.quantity,
        )?;
        self.form.clear();
        Ok(response)
    }

    /// "Clear Bill" pressed.
    pub fn clear_bill(&mut self) -> Notice {
        bill::clear_bill(&mut self.bill, &self.config);
        self.form.clear();
        info!("Bill cleared");
        Notice::info("Bill Cleared", "The current bill has been cleared.")
    }

    /// The live item list with its running total.
    pub fn bill_view(&self) -> bill::BillResponse {
        bill::get_bill(&self.bill, &self.config)
    }

    /// The "View Bill" tab.
    pub fn invoice_text(&self) -> invoice::InvoiceResponse {
        invoice::get_invoice(&self.bill, &self.config)
    }

    pub fn products(&self) -> Vec<catalog::ProductDto> {
        catalog::list_products(&self.bill, &self.config)
    }
}
