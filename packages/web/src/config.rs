//! Settings the app is launched with.

use api::{ApiConfig, ConfigError};
use ui::Locale;

/// Provided as root context by `main`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub locale: Locale,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiConfig::from_env()?,
            locale: detect_locale(),
        })
    }
}

/// The browser's preferred language.
#[cfg(target_arch = "wasm32")]
fn detect_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

/// `LANG`, e.g. `ko_KR.UTF-8`.
#[cfg(not(target_arch = "wasm32"))]
fn detect_locale() -> Locale {
    std::env::var("LANG")
        .map(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}
