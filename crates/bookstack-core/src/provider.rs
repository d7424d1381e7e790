//! Book repository operations.
//!
//! Each operation acquires one scoped [`Session`](crate::db::Session),
//! performs a single read or write, and maps storage outcomes to the
//! client-facing error taxonomy. Shape validation happens here, before
//! the session is acquired.

use tracing::debug;

use bookstack_model::error::BooksError;
use bookstack_model::input::BookInput;
use bookstack_model::output::DeleteAck;
use bookstack_model::types::Book;

use crate::db::Database;
use crate::error::storage_error_to_books;

/// The book repository: the five operations against the storage layer.
#[derive(Debug)]
pub struct BookstackLibrary {
    db: Database,
}

impl BookstackLibrary {
    /// Create a repository over an opened database.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all books in natural storage order.
    pub fn handle_list_books(&self) -> Result<Vec<Book>, BooksError> {
        let session = self.db.session();
        session.list_books().map_err(storage_error_to_books)
    }

    /// Insert a candidate book and return the persisted record.
    pub fn handle_create_book(&self, input: &BookInput) -> Result<Book, BooksError> {
        input.validate()?;
        let session = self.db.session();
        let book = session.insert_book(input).map_err(storage_error_to_books)?;
        debug!(id = book.id, "created book");
        Ok(book)
    }

    /// Fetch a book by identifier.
    pub fn handle_get_book(&self, id: i64) -> Result<Book, BooksError> {
        let session = self.db.session();
        session
            .get_book(id)
            .map_err(storage_error_to_books)?
            .ok_or_else(BooksError::book_not_found)
    }

    /// Replace a book's title, author, and year. Every field must be
    /// supplied; partial updates are not supported.
    pub fn handle_update_book(&self, id: i64, input: &BookInput) -> Result<Book, BooksError> {
        input.validate()?;
        let session = self.db.session();
        session
            .update_book(id, input)
            .map_err(storage_error_to_books)?
            .ok_or_else(BooksError::book_not_found)
    }

    /// Remove a book by identifier.
    pub fn handle_delete_book(&self, id: i64) -> Result<DeleteAck, BooksError> {
        let session = self.db.session();
        let deleted = session.delete_book(id).map_err(storage_error_to_books)?;
        if deleted {
            Ok(DeleteAck::removed())
        } else {
            Err(BooksError::book_not_found())
        }
    }
}
