//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This holds the
//! page-global visual state (theme, mobile nav); page content is owned by
//! the page components themselves.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::theme::{self, Theme};

/// Page-global visual state
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Active color theme
    pub theme: Theme,
    /// Whether the mobile nav menu is open
    pub nav_open: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip the theme, then persist and apply it
pub fn store_toggle_theme(store: &UiStore) {
    let next = store.theme().get().toggled();
    store.theme().set(next);
    theme::persist(next);
    theme::apply(next);
}

/// Open or close the mobile nav menu
pub fn store_toggle_nav(store: &UiStore) {
    store.nav_open().update(|open| *open = !*open);
}

/// Close the mobile nav menu (after following a link)
pub fn store_close_nav(store: &UiStore) {
    store.nav_open().set(false);
}
