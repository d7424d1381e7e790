//! Conversions from storage errors to the client-facing error type.

use bookstack_model::error::BooksError;

/// Convert a storage error into an internal book service error.
///
/// Database connectivity failures are single-attempt and surface as 500;
/// there is nothing to retry or roll back.
///
/// Takes `e` by value because this is used as a closure argument to `.map_err()`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn storage_error_to_books(e: crate::db::StoreError) -> BooksError {
    BooksError::internal_error(e.to_string())
}
