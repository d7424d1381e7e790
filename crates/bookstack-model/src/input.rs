//! Request body for create and update operations.

use serde::{Deserialize, Serialize};

use crate::error::BooksError;

/// A candidate book: everything except the identifier.
///
/// Used verbatim by both `CreateBook` and `UpdateBook` (updates are full
/// replacements; partial updates are not supported). Unknown fields,
/// including a client-sent `id`, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    /// Book title, must be non-empty.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Book author, must be non-empty.
    #[serde(rename = "autor")]
    pub author: String,
    /// Year of publication.
    #[serde(rename = "ano_publicacao")]
    pub year: i64,
}

impl BookInput {
    /// Validate the shape constraints that the type system cannot express:
    /// `titulo` and `autor` must be non-empty text.
    pub fn validate(&self) -> Result<(), BooksError> {
        if self.title.is_empty() {
            return Err(BooksError::validation("titulo must be non-empty text"));
        }
        if self.author.is_empty() {
            return Err(BooksError::validation("autor must be non-empty text"));
        }
        Ok(())
    }
}
