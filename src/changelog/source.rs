use crate::constants::{DEFAULT_RELEASES_URL, USER_AGENT};
use crate::core::{BoxFuture, Result, UpdaterError};
use std::time::Duration;
use tracing::debug;

use super::GitHubRelease;

/// Source of the raw release list.
///
/// Implementations report every failure as [`UpdaterError::FetchFailure`];
/// callers decide whether that is fatal (it never is for changelogs).
pub trait ReleaseSource: Send + Sync {
    /// Fetch the most recent releases, newest first as published.
    fn fetch_releases(&self) -> BoxFuture<'_, Result<Vec<GitHubRelease>>>;
}

/// Release list fetched from the GitHub releases API.
///
/// # Examples
///
/// ```rust,no_run
/// use cc_version_updater::changelog::{GitHubReleaseSource, ReleaseSource};
///
/// # async fn example() -> cc_version_updater::core::Result<()> {
/// let source = GitHubReleaseSource::new();
/// let releases = source.fetch_releases().await?;
/// println!("{} releases published", releases.len());
/// # Ok(())
/// # }
/// ```
pub struct GitHubReleaseSource {
    /// Full API URL including the page size query.
    url: String,
    /// Request timeout; `None` leaves the request unbounded.
    timeout: Option<Duration>,
}

impl Default for GitHubReleaseSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_RELEASES_URL.to_string(),
            timeout: None,
        }
    }
}

impl GitHubReleaseSource {
    /// Source pointed at the Claude Code release list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different releases endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Bound the request duration.
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint this source queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<GitHubRelease>> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| UpdaterError::fetch_failure(&self.url, e))?;

        debug!("Fetching releases from {}", self.url);
        let response = client
            .get(&self.url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| UpdaterError::fetch_failure(&self.url, e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(UpdaterError::fetch_failure(&self.url, format!("HTTP {}", status.as_u16())));
        }

        response
            .json::<Vec<GitHubRelease>>()
            .await
            .map_err(|e| UpdaterError::fetch_failure(&self.url, e))
    }
}

impl ReleaseSource for GitHubReleaseSource {
    fn fetch_releases(&self) -> BoxFuture<'_, Result<Vec<GitHubRelease>>> {
        Box::pin(self.fetch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::fetch_changelogs;
    use crate::core::ErrorCategory;
    use crate::test_utils::init_test_logging;
    use crate::version::Version;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a loopback port and return its URL.
    async fn serve_once(status_line: &str, body: &str) -> String {
        init_test_logging(None);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/releases")
    }

    const TWO_RELEASES: &str = r#"[
        {"tag_name": "v1.2.0", "body": "Faster startup", "draft": false},
        {"tag_name": "v1.1.0", "body": null}
    ]"#;

    #[tokio::test]
    async fn test_non_ok_status_is_fetch_failure() {
        let url = serve_once("403 Forbidden", r#"{"message":"rate limited"}"#).await;
        let source = GitHubReleaseSource::new()
            .with_url(url)
            .with_timeout(Some(Duration::from_secs(5)));

        let err = source.fetch_releases().await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::FetchFailure);
        assert!(err.to_string().contains("HTTP 403"));
    }

    #[tokio::test]
    async fn test_ok_status_decodes_releases() {
        let url = serve_once("200 OK", TWO_RELEASES).await;
        let source = GitHubReleaseSource::new()
            .with_url(url)
            .with_timeout(Some(Duration::from_secs(5)));

        let releases = source.fetch_releases().await.unwrap();
        assert_eq!(
            releases,
            vec![
                GitHubRelease::new("v1.2.0", Some("Faster startup")),
                GitHubRelease::new("v1.1.0", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_changelogs_from_served_releases() {
        let url = serve_once("200 OK", TWO_RELEASES).await;
        let source = GitHubReleaseSource::new()
            .with_url(url)
            .with_timeout(Some(Duration::from_secs(5)));

        let changelogs =
            fetch_changelogs(&source, &Version::new(1, 0, 0), &Version::new(1, 2, 0)).await;
        let entries: Vec<_> =
            changelogs.iter().map(|r| (r.version.as_str(), r.changelog.as_str())).collect();
        assert_eq!(
            entries,
            vec![("1.2.0", "Faster startup"), ("1.1.0", "No changelog available")]
        );
    }

    #[tokio::test]
    async fn test_server_error_degrades_to_no_changelogs() {
        let url = serve_once("500 Internal Server Error", "{}").await;
        let source = GitHubReleaseSource::new().with_url(url);

        let changelogs =
            fetch_changelogs(&source, &Version::new(1, 0, 0), &Version::new(1, 2, 0)).await;
        assert!(changelogs.is_empty());
    }

    #[test]
    fn test_default_source() {
        let source = GitHubReleaseSource::new();
        assert_eq!(source.url(), DEFAULT_RELEASES_URL);
        assert!(source.timeout.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let source = GitHubReleaseSource::new()
            .with_url("http://localhost:1/releases")
            .with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(source.url(), "http://localhost:1/releases");
        assert_eq!(source.timeout, Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_fetch_failure() {
        // Port 9 (discard) is not listening on loopback in test environments
        let source = GitHubReleaseSource::new()
            .with_url("http://127.0.0.1:9/releases")
            .with_timeout(Some(Duration::from_secs(5)));
        let err = source.fetch_releases().await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::FetchFailure);
    }
}
