//! Todo Header Component
//!
//! Toggle-all button and the new todo field.

use leptos::html;
use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn TodoHeader(
    #[prop(into)] todos: Signal<Vec<Todo>>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the new todo field once it is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let all_completed = move || todos.with(|t| !t.is_empty() && t.iter().all(|todo| todo.completed));

    view! {
        <header class="todoapp__header">
            <Show when=move || todos.with(|t| !t.is_empty())>
                <button
                    data-cy="ToggleAllButton"
                    type="button"
                    class=move || if all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                />
            </Show>

            // Creating todos is not supported; keep the page from reloading
            <form on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                <input
                    data-cy="NewTodoField"
                    type="text"
                    node_ref=input_ref
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                />
            </form>
        </header>
    }
}
