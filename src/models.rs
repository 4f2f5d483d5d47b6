//! Frontend Models
//!
//! Data structures matching the todos API.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

/// Signed-in user as kept in browser storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}
