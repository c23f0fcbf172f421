//! # Entry Form State
//!
//! Raw text of the two input fields plus the suggestion list under the
//! name field. Nothing here is validated; validation happens when the
//! cashier submits.

use serde::Serialize;
use supermart_core::{Autocomplete, Catalog};

/// The "Enter Item Details" form.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryForm {
    /// Product name field, exactly as typed.
    pub name: String,

    /// Quantity field, exactly as typed.
    pub quantity: String,

    #[serde(skip)]
    autocomplete: Autocomplete,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name field and refreshes suggestions.
    pub fn set_name(&mut self, catalog: &Catalog, text: &str) -> &[String] {
        self.name = text.to_string();
        self.autocomplete.on_text_changed(catalog, text)
    }

    /// Replaces the quantity field.
    pub fn set_quantity(&mut self, text: &str) {
        self.quantity = text.to_string();
    }

    pub fn suggestions(&self) -> &[String] {
        self.autocomplete.visible_suggestions()
    }

    /// Copies the chosen suggestion into the name field.
    ///
    /// Returns the selected name, or `None` (form untouched) when `index`
    /// is not a visible suggestion.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&str> {
        let picked = self.autocomplete.select(index)?;
        self.name = picked;
        Some(self.name.as_str())
    }

    /// Empties both fields and hides the suggestions.
    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.autocomplete.reset();
    }
}
