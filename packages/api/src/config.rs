//! Backend location, from the environment.

use reqwest::Url;

use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Used when `API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the users API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Build a config from an explicit base URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        Ok(Self { base_url })
    }

    /// Read `API_BASE_URL` (loading `.env` first), falling back to [`DEFAULT_BASE_URL`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let url = std::env::var(API_BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&url)
    }

    /// Browsers have no process environment; the URL is baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a resource path such as `/users`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
