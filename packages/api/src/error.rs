//! Error types for billing API calls.

use thiserror::Error;

/// Everything that can go wrong talking to the billing API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No bearer token in the session; the request was never sent.
    #[error("Not signed in")]
    NotAuthenticated,

    /// The API answered 401 to an authenticated call. The session has already
    /// been cleared when this is returned.
    #[error("Session expired")]
    Unauthorized,

    /// The login exchange was refused.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Non-success status, usually a business validation error.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    /// Whether the session is gone and the user must sign in again.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated | ApiError::Unauthorized)
    }

    /// Text suitable for a form error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotAuthenticated | ApiError::Unauthorized => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::InvalidCredentials => "Invalid email or password".to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Network(_) | ApiError::Timeout => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_login() {
        assert!(ApiError::NotAuthenticated.requires_login());
        assert!(ApiError::Unauthorized.requires_login());
        assert!(!ApiError::InvalidCredentials.requires_login());
        assert!(!ApiError::Timeout.requires_login());
    }

    #[test]
    fn test_business_errors_surface_server_message() {
        let err = ApiError::Rejected {
            status: 409,
            message: "Plan already assigned".to_string(),
        };
        assert_eq!(err.user_message(), "Plan already assigned");
        assert_eq!(err.to_string(), "Request rejected (409): Plan already assigned");
    }
}
