//! Bookstack business logic: configuration, SQLite storage, and the
//! repository operations behind the HTTP layer.
#![allow(missing_docs, clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod provider;
