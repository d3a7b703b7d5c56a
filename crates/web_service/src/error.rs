use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use note_core::NoteError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Note(#[from] NoteError),

    /// Body could not be deserialized into the expected request shape.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

/// `detail` carries the same message for the browser UI, which reads it
/// from every failed response.
#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
    detail: String,
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Note(NoteError::Configuration(_)) => "configuration_error",
            AppError::Note(NoteError::Validation(_)) | AppError::InvalidRequest(_) => {
                "invalid_request_error"
            }
            AppError::Note(NoteError::Authentication(_)) => "authentication_error",
            AppError::Note(NoteError::Adapter(_)) => "api_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Note(NoteError::Configuration(_))
            | AppError::Note(NoteError::Validation(_))
            | AppError::Note(NoteError::Authentication(_))
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Note(NoteError::Adapter(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let message = self.to_string();
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: message.clone(),
                r#type: self.error_type().to_string(),
            },
            detail: message,
        };
        HttpResponse::build(status_code).json(error_response)
    }
}
