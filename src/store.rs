//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::FilterStatus;
use crate::models::Todo;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos of the signed-in user, as fetched
    pub todos: Vec<Todo>,
    /// Currently selected filter
    pub filter_status: FilterStatus,
    /// Error banner text, empty when hidden
    pub error: String,
}

impl AppState {
    pub fn new(filter_status: FilterStatus) -> Self {
        Self {
            filter_status,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole todo list
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

pub fn store_set_filter(store: &AppStore, status: FilterStatus) {
    *store.filter_status().write() = status;
}

pub fn store_show_error(store: &AppStore, message: &str) {
    *store.error().write() = message.to_string();
}

/// Hide the banner. Skips the write when it is already hidden so the
/// mount timer does not notify subscribers for nothing.
pub fn store_dismiss_error(store: &AppStore) {
    if store.error().read_untracked().is_empty() {
        return;
    }
    store.error().write().clear();
}
