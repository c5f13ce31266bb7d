//! Shared response plumbing for the page handlers

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};

use crate::domain::DomainError;
use crate::views;

/// 302 to a list route after a successful mutation
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            DomainError::NotFound => (StatusCode::NOT_FOUND, views::not_found_page()).into_response(),
            DomainError::Forbidden(message) => (StatusCode::FORBIDDEN, message).into_response(),
            DomainError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, errors.to_string()).into_response()
            }
            e @ (DomainError::Database(_) | DomainError::Internal(_)) => {
                tracing::error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Integer `:id` path segment. Anything else is a 404 rather than a 400.
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RecordId(id)),
            Err(rejection) => {
                tracing::debug!("Rejected record id: {}", rejection);
                Err(DomainError::NotFound.into_response())
            }
        }
    }
}
