use crate::prelude::*;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const USER_AGENT: &str = concat!("crosspost/", env!("CARGO_PKG_VERSION"));

/// Where the rendered article comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
}

impl Source {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Source::Url(trimmed.to_string())
        } else {
            Source::Path(PathBuf::from(trimmed))
        }
    }

    /// Read the whole HTML source.
    pub async fn read(&self, timeout: Duration) -> Result<String> {
        match self {
            Source::Url(url) => fetch_url(url, timeout).await,
            Source::Path(path) => {
                if !path.exists() {
                    return Err(Error::SourceNotFound(path.display().to_string()).into());
                }
                tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

async fn fetch_url(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;

    if !response.status().is_success() {
        return Err(Error::FetchStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        }
        .into());
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {url}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urls() {
        assert_eq!(
            Source::parse("https://takeonrules.com/post/"),
            Source::Url("https://takeonrules.com/post/".to_string())
        );
        assert_eq!(
            Source::parse(" http://localhost:1313/post/ "),
            Source::Url("http://localhost:1313/post/".to_string())
        );
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(
            Source::parse("public/2020/post/index.html"),
            Source::Path(PathBuf::from("public/2020/post/index.html"))
        );
        assert_eq!(
            Source::parse("httpdocs/index.html"),
            Source::Path(PathBuf::from("httpdocs/index.html"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::parse("https://x.test/").to_string(), "https://x.test/");
        assert_eq!(Source::parse("a/b.html").to_string(), "a/b.html");
    }

    #[tokio::test]
    async fn test_read_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<p>hi</p>").unwrap();

        let source = Source::Path(path);
        let html = source.read(Duration::from_secs(1)).await.unwrap();
        assert_eq!(html, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::Path(dir.path().join("missing.html"));
        let err = source.read(Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::SourceNotFound(_))
        ));
    }
}
