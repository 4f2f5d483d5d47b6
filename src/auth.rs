//! Signed-in User
//!
//! The user is kept in browser `localStorage` by the login page. This
//! frontend only reads it.

use crate::logging;
use crate::models::User;

/// Storage key holding the user JSON
pub const USER_STORAGE_KEY: &str = "user";

/// Decode the stored user, ignoring anything malformed
pub fn parse_stored_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Read the current user from `localStorage`, if any
pub fn load_stored_user() -> Option<User> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(USER_STORAGE_KEY).ok()??;

    let user = parse_stored_user(&raw);
    if user.is_none() {
        logging::error(&format!("[AUTH] Ignoring malformed stored user: {}", raw));
    }
    user
}
