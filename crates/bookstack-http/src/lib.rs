//! Bookstack HTTP service layer.
//!
//! Implements the JSON-over-HTTP/1.1 protocol of the book inventory API:
//!
//! - **Router**: maps method + path under the route prefix to a [`BookOperation`]
//! - **Handler trait**: the boundary between HTTP and business logic
//! - **Service**: hyper `Service` implementation for the book routes
//! - **Response helpers**: JSON success and `{"detail": ...}` error formatting
//!
//! [`BookOperation`]: bookstack_model::BookOperation
#![allow(missing_docs)]

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::BooksResponseBody;
pub use dispatch::{BooksHandler, NotImplementedHandler};
pub use service::{BooksHttpConfig, BooksHttpService};
