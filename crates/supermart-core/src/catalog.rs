//! # Catalog Module
//!
//! The fixed, read-only product table: name → unit price.
//!
//! ## Lookup Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lookup("Apple")        exact key match      ──► Some(Apple @ 2.50)     │
//! │  lookup("apple")        exact key match      ──► None                   │
//! │  prefix_search("ch")    lowercase prefix     ──► [Cheese (200g),        │
//! │                         in catalog order          Chicken(1kg)]         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names are unique under case-insensitive comparison. `Catalog::new`
//! enforces it, so a bill line's lowercase merge key always identifies
//! exactly one product.

use serde::Serialize;

use crate::error::CatalogError;
use crate::money::Money;
use crate::types::CatalogEntry;

/// The built-in product table, kept in alphabetical order so that
/// suggestions read alphabetically. Prices are in paise.
const DEFAULT_PRODUCTS: &[(&str, i64)] = &[
    ("Apple", 250),
    ("Banana", 120),
    ("Bread", 225),
    ("Cheese (200g)", 380),
    ("Chicken(1kg)", 875),
    ("Eggs(1 Doz)", 450),
    ("Milk(1L)", 300),
    ("Pasta (500g)", 175),
    ("Rice (5kg)", 1000),
    ("Water Bottle", 100),
];

/// Immutable product catalog preserving insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty names, non-positive prices and
    /// names that collide case-insensitively.
    ///
    /// ```rust
    /// use supermart_core::{Catalog, CatalogEntry, Money};
    ///
    /// let catalog = Catalog::new(vec![
    ///     CatalogEntry::new("Tea", Money::from_minor(90)),
    ///     CatalogEntry::new("tea", Money::from_minor(95)),
    /// ]);
    /// assert!(catalog.is_err());
    /// ```
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut accepted: Vec<CatalogEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !entry.unit_price.is_positive() {
                return Err(CatalogError::NonPositivePrice { name: entry.name });
            }

            let key = entry.merge_key();
            if let Some(existing) = accepted.iter().find(|e| e.merge_key() == key) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name,
                    existing: existing.name.clone(),
                });
            }

            accepted.push(entry);
        }

        Ok(Catalog { entries: accepted })
    }

    /// Exact, case-sensitive lookup against the stored names.
    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Every entry whose lowercase name starts with `partial.to_lowercase()`,
    /// in catalog order.
    ///
    /// An empty `partial` matches everything. Hiding results for empty input
    /// is the autocomplete's job, not the catalog's.
    pub fn prefix_search(&self, partial: &str) -> Vec<&CatalogEntry> {
        let needle = partial.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().starts_with(&needle))
            .collect()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    /// The store's fixed product table.
    fn default() -> Self {
        Catalog {
            entries: DEFAULT_PRODUCTS
                .iter()
                .map(|&(name, paise)| CatalogEntry::new(name, Money::from_minor(paise)))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
