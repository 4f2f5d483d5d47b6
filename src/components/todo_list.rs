//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::Todo;

/// Renders the visible todos in order
#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<Todo>>,
) -> impl IntoView {
    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=move || todos.get()
                key=|todo| todo.id
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </section>
    }
}
