//! Book request router.
//!
//! All book routes live under a fixed path prefix (default `/api/livros`):
//!
//! ```text
//! GET    {prefix}/       -> ListBooks
//! POST   {prefix}/       -> CreateBook
//! GET    {prefix}/{id}   -> GetBook
//! PUT    {prefix}/{id}   -> UpdateBook
//! DELETE {prefix}/{id}   -> DeleteBook
//! ```
//!
//! A non-integer `{id}` is a 422, a path outside the prefix is a 404, and
//! a known path with an unsupported verb is a 405.

use http::Method;

use bookstack_model::error::BooksError;
use bookstack_model::operations::BookOperation;

/// Resolve a book operation from an HTTP method and URI path.
///
/// The `prefix` is matched literally and must not end with a slash
/// (e.g. `/api/livros`). Both `{prefix}` and `{prefix}/` address the
/// collection.
pub fn resolve_operation(
    method: &Method,
    path: &str,
    prefix: &str,
) -> Result<BookOperation, BooksError> {
    let Some(rest) = path.strip_prefix(prefix) else {
        return Err(BooksError::unknown_route(path));
    };

    // Collection routes: "{prefix}" and "{prefix}/".
    if rest.is_empty() || rest == "/" {
        return if *method == Method::GET {
            Ok(BookOperation::ListBooks)
        } else if *method == Method::POST {
            Ok(BookOperation::CreateBook)
        } else {
            Err(BooksError::method_not_allowed(method))
        };
    }

    // Item routes: "{prefix}/{id}" with optional trailing slash.
    let Some(segment) = rest.strip_prefix('/') else {
        // Prefix matched mid-segment, e.g. "/api/livrosx".
        return Err(BooksError::unknown_route(path));
    };
    let segment = segment.strip_suffix('/').unwrap_or(segment);

    if segment.is_empty() || segment.contains('/') {
        return Err(BooksError::unknown_route(path));
    }

    let id: i64 = segment
        .parse()
        .map_err(|_| BooksError::validation(format!("id must be an integer, got '{segment}'")))?;

    if *method == Method::GET {
        Ok(BookOperation::GetBook { id })
    } else if *method == Method::PUT {
        Ok(BookOperation::UpdateBook { id })
    } else if *method == Method::DELETE {
        Ok(BookOperation::DeleteBook { id })
    } else {
        Err(BooksError::method_not_allowed(method))
    }
}
