//! Integration tests for the Bookstack server.
//!
//! These tests require a running Bookstack server at `localhost:8000`.
//! They are marked `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! DATABASE_URL=:memory: bookstack-server &
//! cargo test -p bookstack-integration -- --ignored
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
fn endpoint_url() -> String {
    std::env::var("BOOKSTACK_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8000".to_owned())
}

/// Create an HTTP client pointing at the local server.
#[must_use]
pub fn client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// URL of the book collection.
#[must_use]
pub fn books_url() -> String {
    format!("{}/api/livros/", endpoint_url())
}

/// URL of a single book.
#[must_use]
pub fn book_url(id: i64) -> String {
    format!("{}/api/livros/{id}", endpoint_url())
}

/// Generate a unique title for a test so runs don't collide.
#[must_use]
pub fn test_title(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("{prefix}-{id}")
}

/// Create a book and return its assigned identifier. Caller is responsible
/// for cleanup.
pub async fn create_test_book(client: &reqwest::Client, title: &str) -> i64 {
    let resp = client
        .post(books_url())
        .json(&serde_json::json!({
            "titulo": title,
            "autor": "Autor de Integração",
            "ano_publicacao": 2024,
        }))
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to create book {title}: {e}"));
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.expect("create response is JSON");
    body["id"].as_i64().expect("created book has integer id")
}

/// Delete a book, ignoring failures (it may already be gone).
pub async fn cleanup_book(client: &reqwest::Client, id: i64) {
    let _ = client.delete(book_url(id)).send().await;
}

mod test_books;
