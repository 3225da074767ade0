use reqwest::header::HeaderMap;
use serde::Deserialize;

/// Normalized per-name result.
///
/// Produced by decoding one response element; never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRecord {
    /// The requested name, echoed by the service.
    pub name: String,
    /// Predicted age, or `None` when the service had no data for the name.
    pub age: Option<u32>,
    /// Number of samples backing the prediction.
    pub count: u64,
    /// The requested country code, echoed when one was supplied.
    #[serde(default)]
    pub country_id: Option<String>,
}

/// Ordered records for one batched lookup, plus optionally captured
/// response headers.
///
/// When header capture was requested, `headers` holds the headers of the
/// *last* issued request; headers of earlier batch requests are discarded.
/// Batches are issued sequentially, so the last response carries the
/// service's most recent rate-limit state (`X-Rate-Limit-Limit`,
/// `X-Rate-Limit-Remaining`).
#[derive(Debug)]
pub struct BatchResult {
    /// One record per requested name, in request order.
    pub records: Vec<PredictionRecord>,
    /// Headers of the last issued request, if capture was requested.
    /// An empty map when capture was requested but no request was issued.
    pub headers: Option<HeaderMap>,
}

/// Accepted response body shapes.
///
/// The service returns a bare object when exactly one name was queried and
/// an array of objects otherwise; both collapse into a uniform record list
/// here, at the decoding boundary. Any other JSON shape fails to decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ResponseBody {
    Many(Vec<PredictionRecord>),
    One(PredictionRecord),
}

impl ResponseBody {
    pub(crate) fn into_records(self) -> Vec<PredictionRecord> {
        match self {
            ResponseBody::Many(records) => records,
            ResponseBody::One(record) => vec![record],
        }
    }
}
