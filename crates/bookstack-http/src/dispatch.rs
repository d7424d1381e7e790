//! Book handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use bookstack_model::error::BooksError;
use bookstack_model::operations::BookOperation;

use crate::body::BooksResponseBody;

/// Trait that the book business logic provider must implement.
///
/// The handler receives a resolved operation and the raw JSON body bytes,
/// and returns a complete HTTP response. This trait is the boundary between
/// the HTTP transport layer and the repository layer.
pub trait BooksHandler: Send + Sync + 'static {
    /// Handle a book operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: BookOperation,
        body: Bytes,
    ) -> Pin<
        Box<dyn Future<Output = Result<http::Response<BooksResponseBody>, BooksError>> + Send>,
    >;
}

/// Dispatch a book operation to the handler.
pub async fn dispatch_operation<H: BooksHandler>(
    handler: &H,
    op: BookOperation,
    body: Bytes,
) -> Result<http::Response<BooksResponseBody>, BooksError> {
    tracing::debug!(operation = %op, "dispatching book operation");
    handler.handle_operation(op, body).await
}

/// Default handler that returns an error for all operations.
#[derive(Debug, Clone, Default)]
pub struct NotImplementedHandler;

impl BooksHandler for NotImplementedHandler {
    fn handle_operation(
        &self,
        op: BookOperation,
        _body: Bytes,
    ) -> Pin<
        Box<dyn Future<Output = Result<http::Response<BooksResponseBody>, BooksError>> + Send>,
    > {
        Box::pin(async move {
            Err(BooksError::internal_error(format!(
                "operation not implemented: {op}"
            )))
        })
    }
}
