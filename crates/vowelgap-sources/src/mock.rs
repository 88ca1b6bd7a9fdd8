//! In-memory word source for tests and demos.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use vowelgap_core::error::LoadError;
use vowelgap_core::traits::WordSource;

/// A word source that serves fixed text, or fails with a fixed status.
pub struct StaticSource {
    /// Text to serve, or the HTTP status to fail with.
    body: Result<String, u16>,
    /// Number of fetches made.
    fetch_count: AtomicU32,
}

impl StaticSource {
    /// Serve `text` on every fetch.
    pub fn new(text: &str) -> Self {
        Self {
            body: Ok(text.to_string()),
            fetch_count: AtomicU32::new(0),
        }
    }

    /// Fail every fetch as if the server answered with `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            body: Err(status),
            fetch_count: AtomicU32::new(0),
        }
    }

    /// Get the number of fetches made against this source.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl WordSource for StaticSource {
    fn location(&self) -> &str {
        "memory"
    }

    async fn fetch_text(&self) -> Result<String, LoadError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);

        match &self.body {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LoadError::HttpStatus {
                url: self.location().to_string(),
                status: *status,
            }),
        }
    }
}
