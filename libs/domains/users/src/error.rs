use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorCode, ErrorResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Malformed request body: {0}")]
    Decode(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error("Database error: {0}")]
    Storage(String),

    #[error("Failed to encode response: {0}")]
    Encode(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Storage(err.to_string())
    }
}

impl UserError {
    pub fn status(&self) -> StatusCode {
        match self {
            UserError::Validation(_) | UserError::Decode(_) | UserError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            UserError::Storage(_) | UserError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::Validation(_) => ErrorCode::ValidationError,
            UserError::Decode(_) => ErrorCode::InvalidJson,
            UserError::InvalidId(_) => ErrorCode::InvalidId,
            UserError::NotFound(_) => ErrorCode::NotFound,
            UserError::MethodNotAllowed(_) => ErrorCode::MethodNotAllowed,
            UserError::Storage(_) => ErrorCode::DatabaseError,
            UserError::Encode(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Server-side failures keep their detail in the log only.
        let message = match &self {
            UserError::Validation(msg) | UserError::Decode(msg) | UserError::InvalidId(msg) => {
                tracing::debug!(error_code = code.code(), "Rejected request: {}", self);
                msg.clone()
            }
            UserError::NotFound(id) => {
                tracing::debug!(error_code = code.code(), user_id = id, "User not found");
                format!("User {} not found", id)
            }
            UserError::MethodNotAllowed(method) => {
                tracing::warn!(
                    error_code = code.code(),
                    method = %method,
                    "{}: {}",
                    StatusCode::METHOD_NOT_ALLOWED,
                    method
                );
                format!("Method {} not allowed", method)
            }
            UserError::Storage(detail) => {
                tracing::error!(error_code = code.code(), "Database error: {}", detail);
                code.default_message().to_string()
            }
            UserError::Encode(detail) => {
                tracing::error!(error_code = code.code(), "Response encoding failed: {}", detail);
                code.default_message().to_string()
            }
        };

        ErrorResponse::new(code, message).into_response_with(status)
    }
}
