//! Error types shared across the crate.
//!
//! Service failures follow a fixed taxonomy: a client-side validation guard
//! (nothing was sent), a remote error with a usable message (surfaced
//! verbatim), and everything transport- or parse-shaped collapsed to one
//! generic message. Nothing here is fatal to the app; every failure leaves
//! the user on the current step able to retry.

use thiserror::Error;

/// Message used for any transport or body-parse failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred";

/// Result alias for service-layer calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a service-layer call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Rejected before dispatch; no request was made.
    #[error("{0}")]
    Validation(String),

    /// Non-OK response. Carries the backend's `message`/`error`/`detail`
    /// text when the body had one, otherwise a per-resource fallback.
    #[error("{0}")]
    Remote(String),

    /// Transport failure or unparseable body.
    #[error("Network error occurred")]
    Network,
}

impl ApiError {
    /// True when no HTTP request was dispatched for this failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// A wizard step refusing to advance: required fields are still blank.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Please fill in: {}", .missing.join(", "))]
pub struct StepError {
    /// Human-readable labels of the blank required fields, in form order.
    pub missing: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_uses_generic_message() {
        assert_eq!(ApiError::Network.to_string(), NETWORK_ERROR_MESSAGE);
        assert_eq!(ApiError::Network.to_string(), "Network error occurred");
    }

    #[test]
    fn remote_error_surfaces_backend_text_verbatim() {
        let err = ApiError::Remote("Missing required fields".into());
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn validation_error_is_flagged_as_not_dispatched() {
        let err = ApiError::Validation("Organization name is required".into());
        assert!(err.is_validation());
        assert!(!ApiError::Network.is_validation());
    }

    #[test]
    fn step_error_lists_missing_fields_in_order() {
        let err = StepError {
            missing: vec!["Organization name", "Industry"],
        };
        assert_eq!(err.to_string(), "Please fill in: Organization name, Industry");
    }
}
