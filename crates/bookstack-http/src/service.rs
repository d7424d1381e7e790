//! Book HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;

use bookstack_model::error::BooksError;

use crate::body::BooksResponseBody;
use crate::dispatch::{BooksHandler, dispatch_operation};
use crate::response::{CONTENT_TYPE, error_to_response};
use crate::router::resolve_operation;

/// Version reported by the health endpoint.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the book HTTP service.
#[derive(Debug, Clone)]
pub struct BooksHttpConfig {
    /// Path prefix for all book routes, without a trailing slash.
    pub route_prefix: String,
}

impl Default for BooksHttpConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/api/livros".to_owned(),
        }
    }
}

/// Hyper `Service` implementation for the book inventory API.
///
/// Wraps a [`BooksHandler`] implementation and routes incoming HTTP
/// requests to the appropriate book operation handler.
#[derive(Debug)]
pub struct BooksHttpService<H: BooksHandler> {
    handler: Arc<H>,
    config: Arc<BooksHttpConfig>,
}

impl<H: BooksHandler> BooksHttpService<H> {
    /// Create a new `BooksHttpService`.
    pub fn new(handler: Arc<H>, config: BooksHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }
}

impl<H: BooksHandler> Clone for BooksHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: BooksHandler> hyper::service::Service<http::Request<Incoming>> for BooksHttpService<H> {
    type Response = http::Response<BooksResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let config = Arc::clone(&self.config);
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            let response = process_request(req, handler.as_ref(), &config, &request_id).await;
            let response = add_common_headers(response, &request_id);
            Ok(response)
        })
    }
}

/// Process a single book HTTP request through the full pipeline.
async fn process_request<H: BooksHandler>(
    req: http::Request<Incoming>,
    handler: &H,
    config: &BooksHttpConfig,
    request_id: &str,
) -> http::Response<BooksResponseBody> {
    let (parts, incoming) = req.into_parts();

    // 1. Intercept health probes ahead of routing; they never touch storage.
    if is_health_check(&parts.method, parts.uri.path()) {
        return health_check_response();
    }

    // 2. Route: resolve the operation from method + path.
    let op = match resolve_operation(&parts.method, parts.uri.path(), &config.route_prefix) {
        Ok(op) => op,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 3. Collect body.
    let body = match collect_body(incoming).await {
        Ok(body) => body,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 4. Dispatch to handler.
    match dispatch_operation(handler, op, body).await {
        Ok(response) => response,
        Err(err) => error_to_response(&err, request_id),
    }
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body(incoming: Incoming) -> Result<Bytes, BooksError> {
    incoming
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| BooksError::internal_error(format!("Failed to read request body: {e}")))
}

/// Check if the request is a health check probe.
fn is_health_check(method: &http::Method, path: &str) -> bool {
    *method == http::Method::GET && (path == "/health" || path == "/_health")
}

/// Produce the health check response.
fn health_check_response() -> http::Response<BooksResponseBody> {
    let body = format!(r#"{{"status":"running","version":"{VERSION}"}}"#);
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .body(BooksResponseBody::from_bytes(body))
        .expect("static health response should be valid")
}

/// Add common response headers to every book service response.
fn add_common_headers(
    mut response: http::Response<BooksResponseBody>,
    request_id: &str,
) -> http::Response<BooksResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry("x-request-id").or_insert(hv);
    }

    headers
        .entry("content-type")
        .or_insert(http::HeaderValue::from_static(CONTENT_TYPE));

    headers.insert("server", http::HeaderValue::from_static("Bookstack"));

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_detect_health_check_paths() {
        assert!(is_health_check(&http::Method::GET, "/health"));
        assert!(is_health_check(&http::Method::GET, "/_health"));
        assert!(!is_health_check(&http::Method::POST, "/health"));
        assert!(!is_health_check(&http::Method::GET, "/api/livros/"));
    }

    #[test]
    fn test_should_produce_health_check_response() {
        let resp = health_check_response();
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some(CONTENT_TYPE),
        );
    }

    #[test]
    fn test_should_default_to_livros_prefix() {
        let config = BooksHttpConfig::default();
        assert_eq!(config.route_prefix, "/api/livros");
    }
}
