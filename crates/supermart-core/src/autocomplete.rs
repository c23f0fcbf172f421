//! # Autocomplete
//!
//! Suggestion list state behind the product-name field.
//!
//! ```text
//! typed "ch"  ──► on_text_changed ──► ["Cheese (200g)", "Chicken(1kg)"]  (visible)
//! typed ""    ──► on_text_changed ──► hidden, nothing to show
//! select(1)   ──► Some("Chicken(1kg)"), list hidden, bill untouched
//! ```

use serde::Serialize;

use crate::catalog::Catalog;

/// Matches typed text against catalog names by lowercase prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Autocomplete {
    typed: String,
    suggestions: Vec<String>,
    visible: bool,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes suggestions for the text currently in the name field.
    ///
    /// The list is shown only when the trimmed text is non-empty and at
    /// least one name matches.
    ///
    /// ```rust
    /// use supermart_core::{Autocomplete, Catalog};
    ///
    /// let catalog = Catalog::default();
    /// let mut ac = Autocomplete::new();
    ///
    /// ac.on_text_changed(&catalog, "ch");
    /// assert_eq!(ac.visible_suggestions(), ["Cheese (200g)", "Chicken(1kg)"]);
    ///
    /// ac.on_text_changed(&catalog, "");
    /// assert!(ac.visible_suggestions().is_empty());
    /// ```
    pub fn on_text_changed(&mut self, catalog: &Catalog, raw_text: &str) -> &[String] {
        self.typed = raw_text.trim().to_lowercase();
        self.suggestions = catalog
            .prefix_search(&self.typed)
            .into_iter()
            .map(|e| e.name.clone())
            .collect();
        self.visible = !self.typed.is_empty() && !self.suggestions.is_empty();
        self.visible_suggestions()
    }

    /// Suggestions the cashier can see; empty while the list is hidden.
    pub fn visible_suggestions(&self) -> &[String] {
        if self.visible {
            &self.suggestions
        } else {
            &[]
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Picks the visible suggestion at `index`.
    ///
    /// Returns the exact catalog casing and hides the list. An index outside
    /// the visible list selects nothing and changes nothing.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let picked = self.visible_suggestions().get(index).cloned()?;
        self.hide();
        Some(picked)
    }

    /// Hides the list without touching the typed text.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Forgets the typed text and hides the list.
    pub fn reset(&mut self) {
        self.typed.clear();
        self.suggestions.clear();
        self.visible = false;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
