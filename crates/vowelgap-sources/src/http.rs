//! HTTP word source.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use vowelgap_core::error::LoadError;
use vowelgap_core::traits::WordSource;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches the word list with a plain GET request.
pub struct HttpSource {
    url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            url: url.to_string(),
            timeout_secs,
            client,
        })
    }
}

#[async_trait]
impl WordSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_text(&self) -> Result<String, LoadError> {
        let network_error = |e: reqwest::Error| {
            if e.is_timeout() {
                LoadError::Timeout {
                    url: self.url.clone(),
                    secs: self.timeout_secs,
                }
            } else {
                LoadError::Network {
                    url: self.url.clone(),
                    message: e.to_string(),
                }
            }
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "word list request failed");
            return Err(LoadError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(network_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn successful_fetch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/spelling.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("корова\nпривет, приветик\n"))
            .mount(&server)
            .await;

        let url = format!("{}/spelling.txt", server.uri());
        let source = HttpSource::new(&url, 5).unwrap();
        assert_eq!(source.location(), url);

        let text = source.fetch_text().await.unwrap();
        assert!(text.contains("приветик"));
    }

    #[tokio::test]
    async fn not_found_is_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/spelling.txt"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/spelling.txt", server.uri()), 5).unwrap();
        let err = source.fetch_text().await.unwrap_err();
        assert!(matches!(err, LoadError::HttpStatus { status: 404, .. }));
        assert!(err.to_string().contains("status: 404"));
    }

    #[tokio::test]
    async fn server_error_is_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpSource::new(&server.uri(), 5).unwrap();
        let err = source.fetch_text().await.unwrap_err();
        assert!(matches!(err, LoadError::HttpStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("кот")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let source = HttpSource::new(&server.uri(), 1).unwrap();
        let err = source.fetch_text().await.unwrap_err();
        assert!(matches!(err, LoadError::Timeout { secs: 1, .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let source = HttpSource::new("http://127.0.0.1:1/spelling.txt", 5).unwrap();
        let err = source.fetch_text().await.unwrap_err();
        assert!(matches!(err, LoadError::Network { .. }));
    }
}
