//! Application-wide error handling.
//!
//! `AppError` is the single error currency of the API. Handlers return
//! `Result<_, AppError>` and rely on the `ResponseError` impl to turn every
//! variant into a JSON `{"error": ...}` body with the matching status code.
//! `From` impls cover the fallible collaborators (`sqlx`, `validator`,
//! `jsonwebtoken`, `bcrypt`) so `?` works throughout the handler code.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    /// Authentication is missing or failed (HTTP 401).
    Unauthorized(String),
    /// The request is well-formed JSON but semantically wrong (HTTP 400).
    BadRequest(String),
    /// The referenced resource does not exist (HTTP 404).
    NotFound(String),
    /// Anything unexpected on our side (HTTP 500).
    InternalServerError(String),
    /// A failed database operation (HTTP 500). The message is logged but
    /// never sent to the client.
    DatabaseError(String),
    /// Input failed `validator` rules (HTTP 422).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Raw database messages stay out of responses.
            AppError::DatabaseError(msg) => {
                log::error!("database error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::Unauthorized(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg)
            | AppError::ValidationError(msg) => msg.clone(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// `sqlx::Error::RowNotFound` maps to 404; everything else is a database
/// failure.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// JWT processing failures (bad signature, expiry, malformed token) are
/// authentication failures from the client's point of view.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Unauthorized("no".into()), 401),
            (AppError::BadRequest("bad".into()), 400),
            (AppError::NotFound("gone".into()), 404),
            (AppError::InternalServerError("boom".into()), 500),
            (AppError::DatabaseError("connection refused".into()), 500),
            (AppError::ValidationError("too short".into()), 422),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected, "{}", error);
        }
    }

    #[test]
    fn test_database_errors_are_not_leaked() {
        let error = AppError::DatabaseError("password authentication failed".into());
        let response = error.error_response();
        assert_eq!(response.status(), 500);
        // The body carries the generic message, not the database detail.
        let body = actix_web::body::to_bytes(response.into_body());
        let body = futures::executor::block_on(body).unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("password"));
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.error_response().status(), 404);
    }
}
