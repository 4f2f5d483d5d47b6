//! Filter Bar Component
//!
//! Links switching between all, active and completed todos.

use leptos::prelude::*;

use crate::filter::FilterStatus;

#[component]
pub fn FilterBar(
    #[prop(into)] status: Signal<FilterStatus>,
    #[prop(into)] on_select: Callback<FilterStatus>,
) -> impl IntoView {
    view! {
        <nav class="filter" data-cy="Filter">
            {FilterStatus::ALL.iter().map(move |&option| {
                let is_selected = move || status.get() == option;
                view! {
                    <a
                        data-cy=option.link_id()
                        href=option.href()
                        class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                        on:click=move |_| on_select.run(option)
                    >
                        {option.label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
