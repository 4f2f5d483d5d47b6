//! Todos API Client
//!
//! Frontend bindings to the remote todos API, organized by resource.

mod todos;

use thiserror::Error;

/// Failure talking to the todos API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

pub use todos::*;
