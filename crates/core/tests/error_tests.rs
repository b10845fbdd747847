// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use diy_index_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn server() {
        let err = CoreError::Server {
            status: 503,
            endpoint: "/api/indices".into(),
        };
        assert_eq!(
            err.to_string(),
            "Server returned HTTP 503 for /api/indices"
        );
    }

    #[test]
    fn invalid_response() {
        let err = CoreError::InvalidResponse("missing field `name`".into());
        assert_eq!(
            err.to_string(),
            "Invalid server response: missing field `name`"
        );
    }

    #[test]
    fn missing_env() {
        let err = CoreError::MissingEnv("DIY_INDEX_API_BASE_URL".into());
        assert_eq!(
            err.to_string(),
            "Missing configuration: environment variable DIY_INDEX_API_BASE_URL is not set"
        );
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("amount must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: amount must be non-negative"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::InvalidResponse(_)));
    }

    #[test]
    fn serde_json_error_keeps_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let msg = json_err.to_string();
        let err: CoreError = json_err.into();
        assert_eq!(err.to_string(), format!("Invalid server response: {msg}"));
    }
}
