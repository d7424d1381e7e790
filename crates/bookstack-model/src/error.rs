//! Book service error types.
//!
//! Errors carry a code, a human-readable message, and an HTTP status.
//! On the wire they are rendered as `{"detail": "<message>"}`, matching
//! the original library API.

use std::fmt;

use http::StatusCode;

/// Well-known book service error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum BooksErrorCode {
    /// Referenced book identifier does not exist.
    NotFound,
    /// Malformed or missing required field.
    #[default]
    ValidationFailed,
    /// Request body could not be deserialized.
    SerializationFailed,
    /// Known route, wrong HTTP verb.
    MethodNotAllowed,
    /// Unexpected failure (storage, serialization of a response).
    InternalError,
}

impl BooksErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::ValidationFailed => "ValidationFailed",
            Self::SerializationFailed => "SerializationFailed",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::InternalError => "InternalError",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ValidationFailed | Self::SerializationFailed => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for BooksErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A book service error with code, message, and HTTP status.
#[derive(Debug, Clone)]
pub struct BooksError {
    /// The error code.
    pub code: BooksErrorCode,
    /// Human-readable message, surfaced in the `detail` field.
    pub message: String,
    /// HTTP status to respond with.
    pub status_code: StatusCode,
}

impl BooksError {
    /// Create an error with the given code and message.
    #[must_use]
    pub fn with_message(code: BooksErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status_code: code.status_code(),
        }
    }

    /// A 404 for a missing book, with the canonical message.
    #[must_use]
    pub fn book_not_found() -> Self {
        Self::with_message(BooksErrorCode::NotFound, "Livro não encontrado")
    }

    /// A 422 validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(BooksErrorCode::ValidationFailed, message)
    }

    /// A 422 for a request body that could not be deserialized.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::with_message(BooksErrorCode::SerializationFailed, message)
    }

    /// A 405 for a known route with an unsupported verb.
    #[must_use]
    pub fn method_not_allowed(method: &http::Method) -> Self {
        Self::with_message(
            BooksErrorCode::MethodNotAllowed,
            format!("Method Not Allowed: {method}"),
        )
    }

    /// A 404 for a path outside the book routes.
    #[must_use]
    pub fn unknown_route(path: &str) -> Self {
        Self {
            code: BooksErrorCode::NotFound,
            message: format!("Not Found: {path}"),
            status_code: StatusCode::NOT_FOUND,
        }
    }

    /// A 500 internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(BooksErrorCode::InternalError, message)
    }
}

impl fmt::Display for BooksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BooksError {}
