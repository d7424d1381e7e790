//! Response bodies that are not plain book records.

use serde::{Deserialize, Serialize};

/// Acknowledgment returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    /// Human-readable confirmation message.
    pub detail: String,
}

impl DeleteAck {
    /// The canonical delete acknowledgment.
    #[must_use]
    pub fn removed() -> Self {
        Self {
            detail: "Livro removido com sucesso".to_owned(),
        }
    }
}
