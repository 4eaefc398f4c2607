//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use namaste_loader::EngineError;
use serde_json::json;
use thiserror::Error;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine failure (not found or validation).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// `Authorization` header present but not a bearer credential.
    #[error("Invalid auth header (expected Bearer)")]
    MalformedCredential,
}

impl ApiError {
    /// Returns the HTTP status of this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Engine(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Engine(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedCredential => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namaste_loader::namaste_types::CatalogId;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::from(EngineError::ConceptNotFound {
            catalog: CatalogId::Namaste,
            code: "X".to_string(),
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let catalog = ApiError::from(EngineError::CatalogNotFound {
            identifier: "loinc".to_string(),
        });
        assert_eq!(catalog.status_code(), StatusCode::NOT_FOUND);

        let invalid = ApiError::from(EngineError::Validation("missing code".to_string()));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "missing code");

        assert_eq!(ApiError::MalformedCredential.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::MalformedCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
