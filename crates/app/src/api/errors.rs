//! Backend API errors.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors talking to the scheduling backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered 404.
    #[error("not found")]
    NotFound {
        /// Message from the response body, if any
        message: Option<String>,
    },

    /// The backend answered with a non-success status.
    #[error("backend request failed with status {status}")]
    Backend {
        /// Response status
        status: StatusCode,

        /// Message from the response body, if any
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message);

        if status == StatusCode::NOT_FOUND {
            Self::NotFound { message }
        } else {
            Self::Backend { status, message }
        }
    }

    /// The message the backend sent along with a failure, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::Backend { message, .. } => message.as_deref(),
            Self::Http(_) | Self::UnexpectedResponse(_) => None,
        }
    }

    /// Check if the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_backend_message() {
        let error = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message": "Product 9 does not exist"}"#,
        );

        assert!(
            matches!(&error, ApiError::Backend { status, .. } if *status == StatusCode::UNPROCESSABLE_ENTITY),
            "unexpected {error:?}"
        );
        assert_eq!(error.backend_message(), Some("Product 9 does not exist"));
    }

    #[test]
    fn not_found_is_distinguished() {
        let error = ApiError::from_status(StatusCode::NOT_FOUND, "");

        assert!(error.is_not_found());
        assert_eq!(error.backend_message(), None);
    }

    #[test]
    fn non_json_bodies_have_no_message() {
        let error = ApiError::from_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");

        assert_eq!(error.backend_message(), None);
        assert_eq!(
            error.to_string(),
            "backend request failed with status 502 Bad Gateway"
        );
    }
}
