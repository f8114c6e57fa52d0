//! API error types with IntoResponse
//!
//! Client-visible failures carry fixed plain-text bodies (the wire
//! contract pins exact strings like "pogs not found"). Storage failures
//! are logged and collapse to a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

/// Fixed 409 body, kept byte-for-byte for wire compatibility.
pub const DUPLICATE_MSG: &str = "Duplicate key violation: pogs_name already exists";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404), route-specific body text
    NotFound(&'static str),

    /// Unique-field collision (409)
    Conflict(&'static str),

    /// Write rejected (422)
    Unprocessable(&'static str),

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_owned()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.to_owned()),
            Self::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.to_owned()),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_owned(),
                )
            }
        };

        (status, body).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Duplicate => Self::Conflict(DUPLICATE_MSG),
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_is_404_with_fixed_body() {
        let response = ApiError::NotFound("pogs not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"pogs not found");
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let response = ApiError::Conflict(DUPLICATE_MSG).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn unprocessable_is_422() {
        let response = ApiError::Unprocessable("POST failed").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn duplicate_maps_to_conflict() {
        let err = ApiError::from(DbError::Duplicate);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], DUPLICATE_MSG.as_bytes());
    }

    #[tokio::test]
    async fn database_error_is_500_with_generic_body() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // The underlying error text must never reach the caller
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"an internal error occurred");
    }
}
