use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use crate::errors::CoreError;

/// Environment variable read by [`Settings::from_env`] on native targets.
pub const API_BASE_URL_ENV: &str = "DIY_INDEX_API_BASE_URL";

/// Dashboard configuration.
///
/// The only knob is where the index API lives; everything else
/// (allocation math, weights) is the server's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the index API (e.g., "https://api.example.com").
    /// Stored without a trailing slash.
    pub api_base_url: String,
}

impl Settings {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the process environment (native only; on
    /// WASM the embedding frontend passes the URL in explicitly).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, CoreError> {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err(CoreError::MissingEnv(API_BASE_URL_ENV.to_string())),
        }
    }
}
