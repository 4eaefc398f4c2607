//! Bearer credential check.
//!
//! The `Authorization` header is optional. When present it must read
//! `Bearer <token>`; the token itself is never validated.

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::{ApiError, ApiResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Middleware rejecting malformed `Authorization` headers with 401.
pub async fn bearer_credential(req: Request, next: Next) -> ApiResult<Response> {
    if let Some(value) = req.headers().get(AUTHORIZATION) {
        let well_formed = value
            .to_str()
            .map(|v| v.starts_with(BEARER_PREFIX))
            .unwrap_or(false);

        if !well_formed {
            tracing::warn!(path = %req.uri().path(), "Rejected malformed authorization header");
            return Err(ApiError::MalformedCredential);
        }
    }

    Ok(next.run(req).await)
}
