//! Todo Requests
//!
//! Frontend bindings for todo-related API endpoints.

use crate::config::ApiConfig;
use crate::logging;
use crate::models::Todo;
use super::ApiError;

/// Fetch every todo owned by `user_id`
pub async fn get_todos(config: &ApiConfig, user_id: u32) -> Result<Vec<Todo>, ApiError> {
    let url = config.todos_url(user_id);
    logging::info(&format!("[API] GET {}", url));

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }

    let todos = response.json::<Vec<Todo>>().await?;
    logging::info(&format!("[API] Received {} todos for user {}", todos.len(), user_id));
    Ok(todos)
}
