//! # Catalog Commands
//!
//! Product listing and name autocomplete.
//!
//! ## Suggestion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cashier types "ch" in the name field                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  suggest_products(text = "ch")                                         │
//! │       │   lowercase prefix match, catalog order                         │
//! │       ▼                                                                 │
//! │  { visible: true, suggestions: ["Cheese (200g)", "Chicken(1kg)"] }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  select_suggestion(1) ──► name field = "Chicken(1kg)"                  │
//! │                           (nothing is added to the bill)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use supermart_core::{CatalogEntry, Money};
use tracing::debug;

use crate::state::{BillState, ConfigState, EntryForm};

/// Product DTO for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub unit_price: Money,
    pub price_display: String,
}

impl ProductDto {
    fn from_entry(entry: &CatalogEntry, config: &ConfigState) -> Self {
        ProductDto {
            name: entry.name.clone(),
            unit_price: entry.unit_price,
            price_display: config.format_currency(entry.unit_price.minor_units()),
        }
    }
}

/// Current state of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub visible: bool,
    pub suggestions: Vec<String>,
}

/// Lists every product in catalog order.
pub fn list_products(bill: &BillState, config: &ConfigState) -> Vec<ProductDto> {
    debug!("list_products command");
    bill.catalog()
        .entries()
        .iter()
        .map(|e| ProductDto::from_entry(e, config))
        .collect()
}

/// Updates the name field and recomputes suggestions.
///
/// Empty text never shows suggestions, even though it prefix-matches
/// every product.
pub fn suggest_products(bill: &BillState, form: &mut EntryForm, text: &str) -> SuggestionResponse {
    let suggestions = form.set_name(bill.catalog(), text).to_vec();
    debug!(text = %text, matches = suggestions.len(), "suggest_products command");

    SuggestionResponse {
        visible: !suggestions.is_empty(),
        suggestions,
    }
}

/// Copies a visible suggestion into the name field.
///
/// ## Returns
/// The exact catalog name, or `None` if `index` is not on the list.
pub fn select_suggestion(form: &mut EntryForm, index: usize) -> Option<String> {
    let selected = form.select_suggestion(index).map(str::to_string);
    debug!(index, selected = ?selected, "select_suggestion command");
    selected
}
