use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Caller-supplied input that was missing or malformed.
///
/// The display text of each variant is the message returned to the client,
/// so callers can assert on the specific failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate,

    #[error("Missing id")]
    MissingId,

    #[error("Missing file {0}")]
    MissingFileField(&'static str),

    #[error("Unsupported file type: {0}. Allowed: images and PDF")]
    UnsupportedFileType(String),

    #[error("File too large: {kind} files may be at most {max_mb}MB")]
    FileTooLarge { kind: &'static str, max_mb: u64 },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{message}: {source}")]
    Operation {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Hides server-side failures behind a generic, operation specific
    /// message. Client errors pass through untouched.
    pub fn or_generic(self, message: &'static str) -> Self {
        match self {
            AppError::Validation(_)
            | AppError::BadRequest(_)
            | AppError::Unauthorized
            | AppError::Operation { .. } => self,
            other => AppError::Operation {
                message,
                source: Box::new(other),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Operation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                "Database error occurred".to_string()
            }
            AppError::Validation(ref err) => err.to_string(),
            AppError::Unauthorized => "Unauthorized".to_string(),
            AppError::BadRequest(ref msg) => msg.clone(),
            AppError::Operation { message, ref source } => {
                tracing::error!("{}: {}", message, source);
                message.to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
