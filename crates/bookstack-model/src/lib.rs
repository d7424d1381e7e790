//! Book model types for Bookstack.
//!
//! The wire protocol keeps the Portuguese field names of the original
//! library API (`titulo`, `autor`, `ano_publicacao`); Rust code uses
//! English identifiers and maps between the two with serde renames.

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{BooksError, BooksErrorCode};
pub use input::BookInput;
pub use operations::BookOperation;
pub use output::DeleteAck;
pub use types::Book;
