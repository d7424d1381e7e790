//! Book operation enum.

use std::fmt;

/// All supported book operations, with the target identifier where one
/// is part of the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookOperation {
    /// List all books.
    ListBooks,
    /// Create a new book.
    CreateBook,
    /// Get a book by identifier.
    GetBook {
        /// The book identifier from the path.
        id: i64,
    },
    /// Replace a book's title, author, and year.
    UpdateBook {
        /// The book identifier from the path.
        id: i64,
    },
    /// Delete a book by identifier.
    DeleteBook {
        /// The book identifier from the path.
        id: i64,
    },
}

impl BookOperation {
    /// Returns the operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListBooks => "ListBooks",
            Self::CreateBook => "CreateBook",
            Self::GetBook { .. } => "GetBook",
            Self::UpdateBook { .. } => "UpdateBook",
            Self::DeleteBook { .. } => "DeleteBook",
        }
    }
}

impl fmt::Display for BookOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
