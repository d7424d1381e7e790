//! The persisted book record.

use serde::{Deserialize, Serialize};

/// A stored book, as returned by every successful read or write.
///
/// Wire shape: `{"id": int, "titulo": string, "autor": string,
/// "ano_publicacao": int}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// System-assigned identifier, immutable once created.
    pub id: i64,
    /// Book title.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Book author.
    #[serde(rename = "autor")]
    pub author: String,
    /// Year of publication.
    #[serde(rename = "ano_publicacao")]
    pub year: i64,
}
