//! Todo Item Component
//!
//! A single todo row. Double-click the title to open the inline edit field.

use leptos::html;
use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let field_ref = NodeRef::<html::Input>::new();

    let completed = todo.completed;
    let title = todo.title;

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = field_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let title_span = title.clone();

    view! {
        <div data-cy="Todo" class=if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                />
            </label>

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span
                        data-cy="TodoTitle"
                        class="todo__title"
                        on:dblclick=move |_| set_editing.set(true)
                    >
                        {title_span.clone()}
                    </span>
                    <button type="button" class="todo__remove" data-cy="TodoDeleteButton">
                        "×"
                    </button>
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    set_editing.set(false);
                }>
                    <input
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        node_ref=field_ref
                        prop:value=title.clone()
                        on:blur=move |_| set_editing.set(false)
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                set_editing.set(false);
                            }
                        }
                    />
                </form>
            </Show>

            // No request is ever in flight for a single todo
            <div data-cy="TodoLoader" class="modal overlay">
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
