//! Backend endpoint configuration.
//!
//! The site talks to a single hosted Xano workspace. The base URL is fixed in
//! production; tests point it at a local mock server.

/// Production API base URL (Xano workspace endpoint group).
pub const DEFAULT_API_BASE: &str = "https://x8k2-qf1r-vhnm.n7c.xano.io/api:hQ9pT3wd";

/// Where service calls are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; resource paths are appended.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at an arbitrary host (mock servers in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_hosted_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert!(!config.base_url.ends_with('/'));
    }

    #[test]
    fn with_base_url_strips_trailing_slashes() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:8080///");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
