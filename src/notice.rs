//! Error Notice
//!
//! Constants and class list behind the dismissible error banner.

/// Delay after mount at which the banner is cleared
pub const ERROR_TIMEOUT_MS: u32 = 3000;

/// Shown when the todo list cannot be loaded
pub const LOAD_TODOS_ERROR: &str = "Unable get todos from server";

/// Class list of the banner; `hidden` exactly when there is no message
pub fn notification_class(message: &str) -> String {
    let mut class = String::from("notification is-danger is-light has-text has-text-weight-normal");
    if message.is_empty() {
        class.push_str(" hidden");
    }
    class
}
