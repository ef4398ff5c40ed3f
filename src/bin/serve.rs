//! Static page server: serves `index.html` on the root path.
//!
//! The listening port comes from the `PORT` environment variable and
//! defaults to 5000.

use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use html_grader::server;

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = server::port_from_env();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, server::router(PathBuf::from(server::PAGE_FILE))).await
}
