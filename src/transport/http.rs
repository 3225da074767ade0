use crate::transport::{Transport, TransportReply};
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use url::Url;

/// Production transport backed by a pooled `reqwest` client.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport for `base_url` with the given identifying
    /// User-Agent and per-request timeout.
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| crate::Error::InvalidArgument(format!("invalid base URL: {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|_| {
                crate::Error::InvalidArgument(
                    "user agent contains characters not allowed in a header value".to_string(),
                )
            })?,
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, params: &[(String, String)]) -> Result<TransportReply> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        Ok(TransportReply {
            status,
            body,
            headers,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
