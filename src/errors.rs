use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

/// Wire-level error code carried by every `AppError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[display("INVALID_PARAM")]
    InvalidParam,

    #[display("DATABASE_ERROR")]
    DatabaseError,
}

/// Two-kind error taxonomy of the service layer.
///
/// - `InvalidParam` → caller input failed a precondition, or the referenced
///   record does not exist
/// - `DatabaseError` → the storage layer failed for any reason
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display("{_0}")]
    InvalidParam(String),

    #[display("{_0}")]
    DatabaseError(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn invalid_param(message: impl Into<String>) -> Self {
        AppError::InvalidParam(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        AppError::DatabaseError(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidParam(_) => ErrorCode::InvalidParam,
            AppError::DatabaseError(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidParam(msg) | AppError::DatabaseError(msg) => msg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub code: ErrorCode,
    pub message: &'a str,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ErrorBody {
                code: self.code(),
                message: self.message(),
            })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "invalid value".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect::<Vec<_>>();

        // field_errors() is a HashMap, keep the output stable
        messages.sort();

        AppError::InvalidParam(messages.join(", "))
    }
}
