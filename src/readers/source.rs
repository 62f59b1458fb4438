use crate::error::{ProcessingError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Where the raw dataset comes from. A fetch is a single read; callers
/// decide what a failure means.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Identifier for logs and error messages.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<String>;
}

/// Dataset served over HTTP(S).
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let text = response.text().await?;
        debug!("Fetched {} bytes from {}", text.len(), self.url);
        Ok(text)
    }
}

/// Dataset on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ProcessingError::Source {
                source_id: self.describe(),
                message: e.to_string(),
            })?;

        // Strips a UTF-8 BOM; malformed sequences become U+FFFD
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);
        if had_errors {
            debug!("{} contained invalid UTF-8, replaced", self.path.display());
        }
        Ok(text.into_owned())
    }
}

/// Dataset already held in memory.
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: "<memory>".to_string(),
            text: text.into(),
        }
    }

    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Pick a source for a command-line identifier: URLs go over HTTP,
/// anything else is treated as a file path.
pub fn source_from_spec(spec: &str) -> Box<dyn DataSource> {
    let lower = spec.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpSource::new(spec))
    } else {
        Box::new(FileSource::new(spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_source_reads_text() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "lat,lng,value\n3.0,101.0,5")?;

        let source = FileSource::new(temp_file.path());
        let text = source.fetch().await?;
        assert_eq!(text, "lat,lng,value\n3.0,101.0,5");
        Ok(())
    }

    #[tokio::test]
    async fn test_file_source_strips_bom() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        temp_file.write_all(b"\xEF\xBB\xBFlat,lng,value\n1,2,3")?;

        let text = FileSource::new(temp_file.path()).fetch().await?;
        assert!(text.starts_with("lat"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_failure() {
        let source = FileSource::new("/nonexistent/points.csv");
        let err = source.fetch().await.unwrap_err();
        assert!(err.is_fetch_failure());
        assert!(err.to_string().contains("/nonexistent/points.csv"));
    }

    #[tokio::test]
    async fn test_static_source() -> Result<()> {
        let source = StaticSource::named("inline", "a\nb");
        assert_eq!(source.describe(), "inline");
        assert_eq!(source.fetch().await?, "a\nb");
        Ok(())
    }

    #[test]
    fn test_source_from_spec() {
        assert_eq!(
            source_from_spec("https://example.org/data.csv").describe(),
            "https://example.org/data.csv"
        );
        assert_eq!(source_from_spec("data/points.csv").describe(), "data/points.csv");
    }
}
