//! Bookstack Server - HTTP book inventory service.
//!
//! Serves the book CRUD API over HTTP/1.1 + JSON, persisting records in a
//! single SQLite table. The process refuses to start without a database
//! location.
//!
//! # Usage
//!
//! ```text
//! DATABASE_URL=./books.db LISTEN=0.0.0.0:8000 bookstack-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DATABASE_URL` | *(required)* | SQLite location (path, `sqlite://` URL, or `:memory:`) |
//! | `LISTEN` | `0.0.0.0:8000` | Bind address |
//! | `ROUTE_PREFIX` | `/api/livros` | Path prefix for the book routes |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bookstack_core::config::BookstackConfig;
use bookstack_core::db::Database;
use bookstack_core::handler::BookstackLibraryHandler;
use bookstack_core::provider::BookstackLibrary;
use bookstack_http::service::{BooksHttpConfig, BooksHttpService};

/// Server version reported in startup logs.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve(
    listener: TcpListener,
    service: BooksHttpService<BookstackLibraryHandler>,
) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

/// Perform a health check by connecting to the server and requesting the
/// health endpoint.
///
/// Exits with code 0 if the response is 200 OK and reports a running
/// service, 1 otherwise.
async fn run_health_check(addr: &str) -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;

    let (mut reader, mut writer) = stream.into_split();

    let request = format!("GET /health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    writer.write_all(request.as_bytes()).await?;
    writer.shutdown().await?;

    let mut response = String::new();
    reader.read_to_string(&mut response).await?;

    if response.contains("200 OK") && response.contains("\"running\"") {
        Ok(())
    } else {
        anyhow::bail!("unhealthy response from {addr}")
    }
}

/// Read the listen address from the environment without touching the rest
/// of the configuration (used by `--health-check` before config loads).
fn listen_addr() -> String {
    std::env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let listen = listen_addr();

    // Handle --health-check flag for Docker HEALTHCHECK.
    if std::env::args().any(|a| a == "--health-check") {
        let addr = listen.replace("0.0.0.0", "127.0.0.1");
        let healthy = run_health_check(&addr).await.is_ok();
        std::process::exit(i32::from(!healthy));
    }

    // Fail fast: no DATABASE_URL, no server.
    let config = BookstackConfig::from_env().context("invalid configuration")?;

    init_tracing(&config.log_level)?;

    info!(
        database_url = %config.database_url,
        "opening book database",
    );
    let db = Database::open(&config.database_url)
        .with_context(|| format!("failed to open database at {}", config.database_url))?;

    let provider = BookstackLibrary::new(db);
    let handler = BookstackLibraryHandler::new(Arc::new(provider));
    let http_config = BooksHttpConfig {
        route_prefix: config.route_prefix.clone(),
    };
    let service = BooksHttpService::new(Arc::new(handler), http_config);

    let addr: SocketAddr = config
        .listen
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.listen))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(
        %addr,
        route_prefix = %config.route_prefix,
        version = VERSION,
        "starting Bookstack Server",
    );

    serve(listener, service).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_listen_addr() {
        // LISTEN is read lazily so the default applies when unset.
        if std::env::var("LISTEN").is_err() {
            assert_eq!(listen_addr(), "0.0.0.0:8000");
        }
    }
}
