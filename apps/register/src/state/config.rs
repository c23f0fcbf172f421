//! # Configuration State
//!
//! Store-facing settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SUPERMART_*`)
//! 2. Defaults (this file)
//!
//! There is no config file and nothing is persisted. With no environment
//! set, the register prints exactly the default store strings.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use supermart_core::{InvoiceLayout, Money};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shell banner)
    pub store_name: String,

    /// First line of every invoice
    pub invoice_title: String,

    /// Currency symbol (for display only, never parsed)
    pub currency_symbol: String,

    /// Courtesy line at the bottom of the invoice
    pub closing_line: String,
}

impl Default for ConfigState {
    /// Returns the store's standard configuration.
    ///
    /// ## Default Values
    /// - Store: "SuperMart Billing System"
    /// - Currency: ₹, two decimals
    fn default() -> Self {
        let layout = InvoiceLayout::default();
        ConfigState {
            store_name: "SuperMart Billing System".to_string(),
            invoice_title: layout.title,
            currency_symbol: layout.currency_symbol,
            closing_line: layout.closing_line,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SUPERMART_STORE_NAME`: Override the banner name
    /// - `SUPERMART_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = value("SUPERMART_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = value("SUPERMART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol.trim().to_string();
        }

        config
    }

    /// Invoice strings derived from this configuration.
    pub fn invoice_layout(&self) -> InvoiceLayout {
        InvoiceLayout {
            title: self.invoice_title.clone(),
            currency_symbol: self.currency_symbol.clone(),
            closing_line: self.closing_line.clone(),
        }
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use supermart_register::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(825), "₹8.25");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        Money::from_minor(minor)
            .with_symbol(&self.currency_symbol)
            .to_string()
    }
}
