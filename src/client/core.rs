use crate::chunk;
use crate::client::lookup::LookupBuilder;
use crate::transport::Transport;
use crate::types::record::ResponseBody;
use crate::types::{BatchResult, PredictionRecord};
use crate::{Error, Result};
use reqwest::header::HeaderMap;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of names the service permits per single request.
///
/// See <https://agify.io/documentation#batch-usage>.
pub const BATCH_LIMIT: usize = 10;

/// Client for the Agify.io age-prediction service.
///
/// Holds only immutable configuration plus the injected transport, so one
/// instance is safely reusable across concurrent callers provided the
/// transport is.
pub struct AgifyClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) api_key: Option<String>,
}

impl AgifyClient {
    /// Create a builder for a client with custom configuration.
    pub fn builder() -> crate::client::builder::AgifyClientBuilder {
        crate::client::builder::AgifyClientBuilder::new()
    }

    /// Create a lookup request builder.
    pub fn lookup(&self) -> LookupBuilder<'_> {
        LookupBuilder::new(self)
    }

    /// Look up the predicted age for a single name.
    ///
    /// Header capture is not supported through this operation; use
    /// [`lookup`](Self::lookup) with
    /// [`include_headers`](LookupBuilder::include_headers) instead.
    pub async fn fetch_one(
        &self,
        name: impl Into<String>,
        country_id: Option<&str>,
    ) -> Result<PredictionRecord> {
        let mut request = self.lookup().name(name);
        if let Some(country) = country_id {
            request = request.country_id(country);
        }
        request.execute_one().await
    }

    /// Look up predicted ages for multiple names, in order.
    ///
    /// Inputs longer than [`BATCH_LIMIT`] are split into multiple requests
    /// transparently; the returned list always matches the input order.
    pub async fn fetch_many<I, S>(
        &self,
        names: I,
        country_id: Option<&str>,
    ) -> Result<Vec<PredictionRecord>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut request = self.lookup().names(names);
        if let Some(country) = country_id {
            request = request.country_id(country);
        }
        Ok(request.execute().await?.records)
    }

    /// Like [`fetch_many`](Self::fetch_many), additionally capturing the
    /// response headers of the last issued request.
    pub async fn fetch_many_with_headers<I, S>(
        &self,
        names: I,
        country_id: Option<&str>,
    ) -> Result<BatchResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut request = self.lookup().names(names).include_headers();
        if let Some(country) = country_id {
            request = request.country_id(country);
        }
        request.execute().await
    }

    /// Issue one request per chunk, strictly sequentially and in chunk
    /// order, and concatenate the normalized records.
    ///
    /// A failing chunk aborts the whole operation; records from earlier
    /// chunks are discarded and remaining chunks are never issued.
    pub(crate) async fn fetch_chunked(
        &self,
        names: Vec<String>,
        country_id: Option<&str>,
    ) -> Result<BatchResult> {
        let mut records = Vec::with_capacity(names.len());
        let mut last_headers = HeaderMap::new();

        for (index, batch) in chunk::chunks(names, BATCH_LIMIT)?.enumerate() {
            debug!(chunk = index, names = batch.len(), "issuing batch request");

            let params = self.batch_params(&batch, country_id);
            let reply = self.transport.get(&params).await?;

            if !(200..300).contains(&reply.status) {
                return Err(Error::Service {
                    status: reply.status,
                });
            }

            let body: ResponseBody = serde_json::from_str(&reply.body)
                .map_err(|e| Error::Format(format!("cannot decode response body: {e}")))?;
            let batch_records = body.into_records();
            if batch_records.len() != batch.len() {
                return Err(Error::Format(format!(
                    "service returned {} records for {} requested names",
                    batch_records.len(),
                    batch.len()
                )));
            }

            records.extend(batch_records);
            last_headers = reply.headers;
        }

        Ok(BatchResult {
            records,
            headers: Some(last_headers),
        })
    }

    /// Query parameters for one batch: repeated `name[]` entries in batch
    /// order, plus `api_key` and `country_id` when configured.
    fn batch_params(&self, batch: &[String], country_id: Option<&str>) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = batch
            .iter()
            .map(|name| ("name[]".to_string(), name.clone()))
            .collect();

        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
        if let Some(country) = country_id {
            params.push(("country_id".to_string(), country.to_string()));
        }
        params
    }
}
