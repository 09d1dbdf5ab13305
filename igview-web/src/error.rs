//! Error types for igview-web
//!
//! Every error becomes an HTML page rendered through the shared layout.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::views::ErrorTemplate;

/// Handler error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Dataset file or section absent from the export (404)
    #[error("Dataset not available: {0}")]
    MissingDataset(String),

    /// Unknown conversation thread (404)
    #[error("Message not found for user {0}")]
    ThreadNotFound(String),

    /// Aggregate requested over a dataset without records (422)
    #[error("No records to summarize in {0}")]
    EmptyDataset(String),

    /// Malformed export data (500)
    #[error("Malformed data in {dataset}: {reason}")]
    MalformedJson { dataset: String, reason: String },

    /// Template rendering failure (500)
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<igview_common::Error> for ApiError {
    fn from(err: igview_common::Error) -> Self {
        use igview_common::Error;

        match err {
            Error::MissingDataset(what) => ApiError::MissingDataset(what),
            Error::NotFound(name) => ApiError::ThreadNotFound(name),
            Error::EmptyDataset(label) => ApiError::EmptyDataset(label),
            Error::MalformedJson { dataset, reason } => ApiError::MalformedJson { dataset, reason },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingDataset(_) | ApiError::ThreadNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EmptyDataset(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedJson { .. } | ApiError::Template(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request failed");
        }

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: &message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                error!(error = %e, "Failed to render error page");
                (status, message).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(igview_common::Error::MissingDataset("x".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(igview_common::Error::NotFound("bob".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(igview_common::Error::EmptyDataset("Ads Viewed".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(igview_common::Error::malformed("Followers", "bad")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_thread_not_found_message() {
        let err = ApiError::from(igview_common::Error::NotFound("bob_42".into()));
        assert_eq!(err.to_string(), "Message not found for user bob_42");
    }
}
