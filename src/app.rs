//! Todo List Frontend App
//!
//! Main application component: loads the signed-in user's todos and shows
//! them through the selected filter.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::auth::load_stored_user;
use crate::components::{ErrorMessage, TodoFooter, TodoHeader, TodoList};
use crate::config::ApiConfig;
use crate::context::{use_app_context, AppContext};
use crate::filter::{filter_todos, FilterStatus};
use crate::logging;
use crate::notice::{ERROR_TIMEOUT_MS, LOAD_TODOS_ERROR};
use crate::store::{
    store_dismiss_error, store_set_filter, store_set_todos, store_show_error, use_app_store,
    AppState, AppStateStoreFields,
};

/// Filter named by the current location hash
fn current_hash_filter() -> Option<FilterStatus> {
    let hash = web_sys::window()?.location().hash().ok()?;
    FilterStatus::from_hash(&hash)
}

/// Root component: owns the state and provides it to the tree
#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new(current_hash_filter().unwrap_or_default()));
    let (user, _) = signal(load_stored_user());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(user, ApiConfig::from_env()));

    view! { <TodoApp /> }
}

#[component]
fn TodoApp() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Load todos on mount
    Effect::new(move |_| {
        // Clear the banner a fixed delay after mount, whatever the fetch is doing
        spawn_local(async move {
            TimeoutFuture::new(ERROR_TIMEOUT_MS).await;
            store_dismiss_error(&store);
        });

        let Some(user) = ctx.user.get_untracked() else {
            logging::info("[APP] No signed-in user, skipping todo load");
            return;
        };
        let config = ctx.config();
        logging::info(&format!("[APP] Loading todos for {} (user {})", user.name, user.id));
        spawn_local(async move {
            match api::get_todos(&config, user.id).await {
                Ok(loaded) => {
                    logging::info(&format!("[APP] Loaded {} todos", loaded.len()));
                    store_set_todos(&store, loaded);
                }
                Err(e) => {
                    logging::error(&format!("[APP] Failed to load todos: {}", e));
                    store_show_error(&store, LOAD_TODOS_ERROR);
                }
            }
        });
    });

    // Back/forward navigation between filter links
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        if let Some(status) = current_hash_filter() {
            store_set_filter(&store, status);
        }
    });

    let todos = Signal::derive(move || store.todos().get());
    let filter_status = Signal::derive(move || store.filter_status().get());
    let visible_todos = Memo::new(move |_| filter_todos(&store.todos().read(), store.filter_status().get()));
    let error_message = Signal::derive(move || store.error().get());

    let select_filter = move |status: FilterStatus| store_set_filter(&store, status);
    let close_error = move |_: ()| store_dismiss_error(&store);

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <TodoHeader todos=todos />

                <TodoList todos=visible_todos />

                <Show when=move || todos.with(|t| !t.is_empty())>
                    <TodoFooter
                        todos=todos
                        status=filter_status
                        on_select=select_filter
                    />
                </Show>
            </div>

            <ErrorMessage message=error_message on_close=close_error />
        </div>
    }
}
