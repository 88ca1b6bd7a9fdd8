//! Local file word source.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::instrument;

use vowelgap_core::error::LoadError;
use vowelgap_core::traits::WordSource;

/// Reads the word list from a UTF-8 file on disk.
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl WordSource for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    #[instrument(skip(self), fields(path = %self.display))]
    async fn fetch_text(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
