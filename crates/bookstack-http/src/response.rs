//! Response serialization and error formatting for the book service.

use bookstack_model::error::BooksError;

use crate::body::BooksResponseBody;

/// Content type for all book service responses.
pub const CONTENT_TYPE: &str = "application/json";

/// Serialize a book service error into a JSON response body.
///
/// The error format follows the original library API:
///
/// ```json
/// {"detail": "Livro não encontrado"}
/// ```
#[must_use]
pub fn error_to_json(error: &BooksError) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "detail": error.message,
    }))
    .expect("JSON serialization of error cannot fail")
}

/// Convert a `BooksError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(
    error: &BooksError,
    request_id: &str,
) -> http::Response<BooksResponseBody> {
    let json = error_to_json(error);
    let body = BooksResponseBody::from_json(json);

    http::Response::builder()
        .status(error.status_code)
        .header("content-type", CONTENT_TYPE)
        .header("x-request-id", request_id)
        .body(body)
        .expect("valid error response")
}

/// Build a 200 success response from JSON bytes.
#[must_use]
pub fn json_response(json: Vec<u8>, request_id: &str) -> http::Response<BooksResponseBody> {
    let body = BooksResponseBody::from_json(json);

    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .header("x-request-id", request_id)
        .body(body)
        .expect("valid JSON response")
}
