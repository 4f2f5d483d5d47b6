//! Todo Footer Component
//!
//! Counter, filter links and the clear-completed button.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::filter::{active_count, completed_count, items_left_label, FilterStatus};
use crate::models::Todo;

#[component]
pub fn TodoFooter(
    /// All todos, unfiltered
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] status: Signal<FilterStatus>,
    #[prop(into)] on_select: Callback<FilterStatus>,
) -> impl IntoView {
    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="todosCounter">
                {move || todos.with(|t| items_left_label(active_count(t)))}
            </span>

            <FilterBar status=status on_select=on_select />

            <button
                data-cy="ClearCompletedButton"
                type="button"
                class="todoapp__clear-completed"
                disabled=move || todos.with(|t| completed_count(t) == 0)
            >
                "Clear completed"
            </button>
        </footer>
    }
}
