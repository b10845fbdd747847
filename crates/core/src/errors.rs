use thiserror::Error;

/// Unified error type for the entire diy-index-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {status} for {endpoint}")]
    Server { status: u16, endpoint: String },

    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Missing configuration: environment variable {0} is not set")]
    MissingEnv(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query strings from URLs embedded in the message so error
        // text stays stable across amounts.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::InvalidResponse(e.to_string())
    }
}
