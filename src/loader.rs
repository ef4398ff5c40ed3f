//! Document loading.
//!
//! Produces raw HTML text from either a local file or a URL. Both paths
//! return typed errors; deciding what a failure means for the process is the
//! CLI's job.

use std::fs;
use std::path::Path;

use url::Url;

use crate::error::{Error, Result};

/// Load an HTML document from a local file.
///
/// The path is verified to exist before reading. File bytes are decoded as
/// UTF-8 with invalid sequences replaced.
pub fn load_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Fetch an HTML document from a URL.
///
/// Issues exactly one GET request and resolves to the response body text.
/// There is no timeout, no retry, and no status-code policy: an HTTP error
/// status still yields its body, only transport-level failures are errors.
pub async fn fetch_url(url: &str) -> Result<String> {
    let url = Url::parse(url)?;
    tracing::debug!(%url, "fetching document");
    let body = reqwest::get(url).await?.text().await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_file_reports_missing_path() {
        let err = load_file(Path::new("no-such-page.html")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn load_file_returns_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<h1>Hi</h1>").unwrap();

        let html = load_file(file.path()).unwrap();
        assert_eq!(html, "<h1>Hi</h1>");
    }

    #[test]
    fn load_file_replaces_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<p>caf\xe9</p>").unwrap();

        let html = load_file(file.path()).unwrap();
        assert_eq!(html, "<p>caf\u{fffd}</p>");
    }

    #[tokio::test]
    async fn fetch_url_rejects_unparsable_url() {
        let err = fetch_url("not a url").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn fetch_url_returns_body_from_local_server() {
        use axum::{routing::get, Router};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/", get(|| async { "<h1>served</h1>" }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let body = fetch_url(&format!("http://{addr}/")).await.unwrap();
        assert_eq!(body, "<h1>served</h1>");
    }

    #[tokio::test]
    async fn fetch_url_fails_on_connection_refused() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_url(&format!("http://{addr}/")).await.unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }
}
