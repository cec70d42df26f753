//! Typed failure reasons for résumé API calls.
//!
//! The client never recovers from a failure; every error is handed to the
//! calling component, which decides how to present it. The taxonomy mirrors
//! the backend's status usage so components can branch on the reason instead
//! of string-matching ad hoc.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 on a mutating call: the viewer has no valid session.
    #[error("Please sign in to save your resume")]
    AuthRequired,
    /// 503: the backend could not reach its storage.
    #[error("The service is temporarily unavailable. Please try again in a moment")]
    ServiceUnavailable,
    /// 400 with an optional field breakdown, already flattened to one
    /// multi-line message.
    #[error("{0}")]
    Validation(String),
    /// 409 on create: another resume already uses this title.
    #[error("{0}")]
    Conflict(String),
    /// 401 on a single-record fetch without a bearer token. Deliberately
    /// ambiguous between "does not exist" and "not yours".
    #[error("Resume not found or access denied")]
    NotFoundOrDenied,
    /// Any other non-2xx, annotated with the status code.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// No HTTP response at all.
    #[error("Could not reach the server: {0}")]
    Network(String),
    /// Non-2xx on calls without a finer mapping.
    #[error("{0}")]
    Failed(String),
}

const EXPIRY_MARKERS: [&str; 5] = [
    "expired",
    "invalid token",
    "invalid session",
    "not authenticated",
    "sign in",
];

impl ApiError {
    /// Whether this failure smells like an expired or missing session, in
    /// which case the editors re-prompt login instead of showing the raw
    /// message.
    pub fn is_auth_expired(&self) -> bool {
        if matches!(self, ApiError::AuthRequired) {
            return true;
        }
        let message = self.to_string().to_lowercase();
        EXPIRY_MARKERS.iter().any(|marker| message.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_required_always_counts_as_expiry() {
        assert!(ApiError::AuthRequired.is_auth_expired());
    }

    #[test]
    fn expiry_is_detected_by_message_substrings() {
        assert!(ApiError::Failed("Session expired, log in again".into()).is_auth_expired());
        assert!(
            ApiError::Server {
                status: 500,
                message: "Invalid token".into()
            }
            .is_auth_expired()
        );
        assert!(!ApiError::Failed("Title already in use".into()).is_auth_expired());
        assert!(!ApiError::ServiceUnavailable.is_auth_expired());
    }
}
