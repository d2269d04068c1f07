//! Filter state: the (selected category, query) pair driving catalog display.
//!
//! The state is owned by whatever presents the catalog (one screen instance),
//! mutated only by user interaction, and never persisted across sessions.

/// Sentinel category label meaning "no category constraint".
///
/// It is always the first entry of the derived category set and the initial
/// selection of a fresh `FilterState`.
pub const ALL_CATEGORIES: &str = "All";

/// The current (category, query) pair.
///
/// ## Lifecycle
/// - Initialized to (`"All"`, empty query)
/// - `select_category` / `set_query` on user interaction
/// - `reset` returns to the initial state (e.g. when the catalog reloads)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selected_category: String,
    query: String,
}

impl FilterState {
    /// Initial state: "All" category, empty query.
    pub fn new() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }

    /// State with both constraints supplied up front.
    pub fn with(selected_category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            selected_category: selected_category.into(),
            query: query.into(),
        }
    }

    /// The currently selected category label ("All" when unconstrained).
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// The raw query text as typed, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query with leading/trailing whitespace removed.
    ///
    /// Trim-then-empty-check decides whether the text predicate applies at
    /// all: a whitespace-only query behaves exactly like an empty one.
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// True when neither constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        self.selected_category == ALL_CATEGORIES && self.trimmed_query().is_empty()
    }

    /// Select a category label (either "All" or a label from the derived
    /// category set for the same product collection).
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Replace the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Back to ("All", "").
    pub fn reset(&mut self) {
        self.selected_category = ALL_CATEGORIES.to_string();
        self.query.clear();
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
