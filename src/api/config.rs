//! API endpoint configuration.

/// Base URL of the WaniKani v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.wanikani.com/v2";

/// Where and how to reach the API.
///
/// # Example
///
/// ```
/// use kanji_coverage::api::ApiConfig;
///
/// let config = ApiConfig::with_base_url("http://localhost:8080/v2/");
/// assert_eq!(config.user_url(), "http://localhost:8080/v2/user");
/// assert_eq!(config.subjects_url(), "http://localhost:8080/v2/subjects");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config pointing at a different API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            user_agent: concat!("kanji-coverage/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// URL of the user-info endpoint.
    pub fn user_url(&self) -> String {
        format!("{}/user", self.base_url)
    }

    /// URL of the first subjects page.
    pub fn subjects_url(&self) -> String {
        format!("{}/subjects", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_wanikani() {
        let config = ApiConfig::default();
        assert_eq!(config.user_url(), "https://api.wanikani.com/v2/user");
        assert_eq!(config.subjects_url(), "https://api.wanikani.com/v2/subjects");
    }

    #[test]
    fn user_agent_names_the_crate() {
        let config = ApiConfig::default();
        assert!(config.user_agent.starts_with("kanji-coverage/"));
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:9999/v2//");
        assert_eq!(config.base_url, "http://127.0.0.1:9999/v2");
    }
}
