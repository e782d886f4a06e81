//! Event domain error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;

/// Event domain errors.
///
/// Enrichment lookup failures are deliberately absent: they are absorbed at
/// the enricher boundary (see [`crate::enrichment::EnrichmentError`]) and
/// never reach a request handler.
#[derive(Debug, Error)]
pub enum EventError {
    /// The event store could not be reached or the query failed.
    /// Fatal for the enclosing request.
    #[error("event store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// Dataset parse or insert failure during bulk import.
    #[error("dataset import failed: {message}")]
    Import { message: String },

    /// Anything else that should never happen.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl EventError {
    pub fn import(message: impl Into<String>) -> Self {
        Self::Import {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<mongodb::error::Error> for EventError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::StoreUnavailable {
            message: err.to_string(),
        }
    }
}

// Clients get an opaque 500 with a plain-text body; detail is logged
// server-side only.
impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let body = match &self {
            EventError::StoreUnavailable { message } => {
                error!(%message, "event store failure");
                "Error retrieving events"
            }
            EventError::Import { message } => {
                error!(%message, "dataset import failure");
                "Error importing events"
            }
            EventError::Internal { message } => {
                error!(%message, "internal failure");
                "Error retrieving events"
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_maps_to_opaque_500() {
        let response = EventError::StoreUnavailable {
            message: "connection refused".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_carries_detail() {
        let err = EventError::import("row 3: missing city_name");
        assert!(err.to_string().contains("row 3"));
    }
}
