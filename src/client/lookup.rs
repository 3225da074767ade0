use crate::types::{BatchResult, PredictionRecord};
use crate::{Error, Result};

use super::core::AgifyClient;

/// Builder for lookup requests.
pub struct LookupBuilder<'a> {
    pub(crate) client: &'a AgifyClient,
    pub(crate) names: Vec<String>,
    pub(crate) country_id: Option<String>,
    pub(crate) include_headers: bool,
}

impl<'a> LookupBuilder<'a> {
    pub(crate) fn new(client: &'a AgifyClient) -> Self {
        Self {
            client,
            names: Vec::new(),
            country_id: None,
            include_headers: false,
        }
    }

    /// Add one name to the lookup.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add names to the lookup, preserving order.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Qualify the lookup with an ISO 3166-1 alpha-2 country code.
    pub fn country_id(mut self, code: impl Into<String>) -> Self {
        self.country_id = Some(code.into());
        self
    }

    /// Capture the response headers of the last issued request in the
    /// result, e.g. to inspect `X-Rate-Limit-Remaining`.
    pub fn include_headers(mut self) -> Self {
        self.include_headers = true;
        self
    }

    /// Execute the lookup and return the ordered records, with headers when
    /// capture was requested.
    ///
    /// An empty name list returns an empty result without any network call.
    pub async fn execute(self) -> Result<BatchResult> {
        let include_headers = self.include_headers;
        let mut result = self
            .client
            .fetch_chunked(self.names, self.country_id.as_deref())
            .await?;
        if !include_headers {
            result.headers = None;
        }
        Ok(result)
    }

    /// Execute a single-name lookup and return the sole record.
    ///
    /// Header capture is meaningless for a single-result lookup and is
    /// rejected with [`Error::InvalidUsage`] before any network call.
    pub async fn execute_one(self) -> Result<PredictionRecord> {
        if self.include_headers {
            return Err(Error::InvalidUsage(
                "header capture is not supported for single-name lookups; use execute()"
                    .to_string(),
            ));
        }
        if self.names.len() != 1 {
            return Err(Error::InvalidUsage(format!(
                "execute_one requires exactly one name, got {}",
                self.names.len()
            )));
        }

        let mut result = self.execute().await?;
        result
            .records
            .pop()
            .ok_or_else(|| Error::Format("service returned no record".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Transport, TransportReply};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts calls and fails if one is ever made.
    struct UnreachableTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for UnreachableTransport {
        async fn get(&self, _params: &[(String, String)]) -> crate::Result<TransportReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::Format("no request expected".to_string()))
        }
    }

    fn client_with(transport: Arc<UnreachableTransport>) -> AgifyClient {
        AgifyClient::builder()
            .transport(transport)
            .build()
            .unwrap()
    }

    #[test]
    fn execute_one_rejects_header_capture_before_any_network_call() {
        let transport = Arc::new(UnreachableTransport {
            calls: AtomicUsize::new(0),
        });
        let client = client_with(transport.clone());

        let err = tokio_test::block_on(
            client.lookup().name("Peter").include_headers().execute_one(),
        )
        .err()
        .expect("expected an error");

        assert!(matches!(err, Error::InvalidUsage(_)));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn execute_one_requires_exactly_one_name() {
        let transport = Arc::new(UnreachableTransport {
            calls: AtomicUsize::new(0),
        });
        let client = client_with(transport.clone());

        let err = tokio_test::block_on(
            client.lookup().names(["Ada", "Grace"]).execute_one(),
        )
        .err()
        .expect("expected an error");

        assert!(matches!(err, Error::InvalidUsage(_)));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_lookup_makes_no_network_call() {
        let transport = Arc::new(UnreachableTransport {
            calls: AtomicUsize::new(0),
        });
        let client = client_with(transport.clone());

        let result = tokio_test::block_on(client.lookup().execute()).unwrap();
        assert!(result.records.is_empty());
        assert!(result.headers.is_none());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_lookup_with_headers_yields_empty_header_map() {
        let transport = Arc::new(UnreachableTransport {
            calls: AtomicUsize::new(0),
        });
        let client = client_with(transport.clone());

        let result =
            tokio_test::block_on(client.lookup().include_headers().execute()).unwrap();
        assert!(result.records.is_empty());
        assert!(result.headers.expect("headers requested").is_empty());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }
}
