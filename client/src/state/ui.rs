#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::catalog::CategoryFilter;

/// Page-level UI state shared between the store header and catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Category currently selected in the catalog bar.
    pub category: CategoryFilter,
    /// Greeting picked once per page load for the signed-in user.
    pub greeting: Option<String>,
}
