use thiserror::Error;

/// Unified error type for the entire car-finance-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
///
/// Nothing here is fatal: every variant is surfaced to the user as a
/// message and leaves the application in a usable state.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Search gateway ──────────────────────────────────────────────
    #[error("Search failed ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        provider: String,
        message: String,
    },

    /// Zero candidates for a query. Distinct from a failure: the gateway
    /// answered, it just found nothing.
    #[error("No vehicles matched the query: {0}")]
    NoMatches(String),

    #[error("Missing API key for provider: {0}")]
    MissingApiKey(String),

    // ── Persistence ─────────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API key leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
