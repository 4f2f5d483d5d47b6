//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::models::User;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user, `None` when nobody is signed in
    pub user: ReadSignal<Option<User>>,
    /// API endpoint
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(user: ReadSignal<Option<User>>, config: ApiConfig) -> Self {
        Self {
            user,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
