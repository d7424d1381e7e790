//! Book handler implementation bridging HTTP to the repository.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;

use bookstack_http::body::BooksResponseBody;
use bookstack_http::dispatch::BooksHandler;
use bookstack_http::response::json_response;
use bookstack_model::error::BooksError;
use bookstack_model::input::BookInput;
use bookstack_model::operations::BookOperation;

use crate::provider::BookstackLibrary;

/// Handler that bridges the HTTP layer to the book repository.
#[derive(Debug)]
pub struct BookstackLibraryHandler {
    provider: Arc<BookstackLibrary>,
}

impl BookstackLibraryHandler {
    /// Create a new handler wrapping a repository.
    #[must_use]
    pub fn new(provider: Arc<BookstackLibrary>) -> Self {
        Self { provider }
    }
}

impl BooksHandler for BookstackLibraryHandler {
    fn handle_operation(
        &self,
        op: BookOperation,
        body: Bytes,
    ) -> Pin<
        Box<dyn Future<Output = Result<http::Response<BooksResponseBody>, BooksError>> + Send>,
    > {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), op, &body) })
    }
}

/// Dispatch a book operation to the appropriate repository method.
fn dispatch(
    provider: &BookstackLibrary,
    op: BookOperation,
    body: &[u8],
) -> Result<http::Response<BooksResponseBody>, BooksError> {
    // Generate a request ID for responses.
    let request_id = uuid::Uuid::new_v4().to_string();

    match op {
        BookOperation::ListBooks => {
            let output = provider.handle_list_books()?;
            serialize(&output, &request_id)
        }
        BookOperation::CreateBook => {
            let input: BookInput = deserialize(body)?;
            let output = provider.handle_create_book(&input)?;
            serialize(&output, &request_id)
        }
        BookOperation::GetBook { id } => {
            let output = provider.handle_get_book(id)?;
            serialize(&output, &request_id)
        }
        BookOperation::UpdateBook { id } => {
            let input: BookInput = deserialize(body)?;
            let output = provider.handle_update_book(id, &input)?;
            serialize(&output, &request_id)
        }
        BookOperation::DeleteBook { id } => {
            let output = provider.handle_delete_book(id)?;
            serialize(&output, &request_id)
        }
    }
}

/// Deserialize a JSON request body into the input type.
fn deserialize<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, BooksError> {
    serde_json::from_slice(body)
        .map_err(|e| BooksError::serialization(format!("Failed to deserialize request body: {e}")))
}

/// Serialize an output type into a JSON HTTP response.
fn serialize<T: serde::Serialize>(
    output: &T,
    request_id: &str,
) -> Result<http::Response<BooksResponseBody>, BooksError> {
    let json = serde_json::to_vec(output)
        .map_err(|e| BooksError::internal_error(format!("Failed to serialize response: {e}")))?;
    Ok(json_response(json, request_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstack_model::error::BooksErrorCode;

    use crate::db::Database;

    fn handler() -> BookstackLibraryHandler {
        let db = Database::open(":memory:").unwrap();
        BookstackLibraryHandler::new(Arc::new(BookstackLibrary::new(db)))
    }

    fn dispatch_for_test(
        h: &BookstackLibraryHandler,
        op: BookOperation,
        body: &[u8],
    ) -> Result<http::Response<BooksResponseBody>, BooksError> {
        dispatch(&h.provider, op, body)
    }

    #[test]
    fn test_should_list_seeded_books_with_200() {
        let h = handler();
        let resp = dispatch_for_test(&h, BookOperation::ListBooks, b"").unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);
    }

    #[test]
    fn test_should_reject_create_with_missing_autor_as_422() {
        let h = handler();
        let body = br#"{"titulo": "Sem Autor", "ano_publicacao": 2000}"#;
        let err = dispatch_for_test(&h, BookOperation::CreateBook, body).unwrap_err();
        assert_eq!(err.code, BooksErrorCode::SerializationFailed);
        assert_eq!(err.status_code, http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_should_reject_malformed_json_as_422() {
        let h = handler();
        let err = dispatch_for_test(&h, BookOperation::CreateBook, b"not json").unwrap_err();
        assert_eq!(err.status_code, http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_should_create_then_get_book() {
        let h = handler();
        let body =
            br#"{"titulo": "Vidas Secas", "autor": "Graciliano Ramos", "ano_publicacao": 1938}"#;
        let resp = dispatch_for_test(&h, BookOperation::CreateBook, body).unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);

        let created = h.provider.handle_list_books().unwrap();
        let book = created.iter().find(|b| b.title == "Vidas Secas").unwrap();
        let resp =
            dispatch_for_test(&h, BookOperation::GetBook { id: book.id }, b"").unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);
    }

    #[test]
    fn test_should_surface_not_found_from_repository() {
        let h = handler();
        let err =
            dispatch_for_test(&h, BookOperation::DeleteBook { id: 31_337 }, b"").unwrap_err();
        assert_eq!(err.code, BooksErrorCode::NotFound);
    }
}
