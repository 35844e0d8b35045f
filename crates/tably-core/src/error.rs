// ── Core error types ──
//
// User-facing errors from tably-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<tably_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Feed errors ──────────────────────────────────────────────────
    #[error("Cannot reach reservation feed: {reason}")]
    FeedUnavailable { reason: String },

    #[error("Feed request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Feed rejected the request (HTTP {status})")]
    FeedRejected { status: u16 },

    #[error("Feed payload invalid: {message}")]
    InvalidPayload { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Invalid reservation record {id}: {reason}")]
    InvalidRecord { id: u64, reason: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<tably_api::Error> for CoreError {
    fn from(err: tably_api::Error) -> Self {
        match err {
            tably_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else {
                    CoreError::FeedUnavailable {
                        reason: e.to_string(),
                    }
                }
            }
            tably_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid feed URL: {e}"),
            },
            tably_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            tably_api::Error::Status { status, .. } => CoreError::FeedRejected { status },
            tably_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidPayload { message }
            }
        }
    }
}
