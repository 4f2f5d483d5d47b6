//! API Configuration
//!
//! Base endpoint of the todos API, fixed at build time.

const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `TODOS_API_URL` at compile time, falling back to the public endpoint
    pub fn from_env() -> Self {
        Self::new(option_env!("TODOS_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn todos_url(&self, user_id: u32) -> String {
        format!("{}/todos?userId={}", self.base_url, user_id)
    }
}
