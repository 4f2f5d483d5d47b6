//! Error Message Component
//!
//! Dismissible error banner at the bottom of the app.

use leptos::prelude::*;

use crate::notice::notification_class;

/// Error banner, hidden while `message` is empty
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            data-cy="ErrorNotification"
            class=move || notification_class(&message.get())
        >
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| on_close.run(())
            />
            {move || message.get()}
        </div>
    }
}
