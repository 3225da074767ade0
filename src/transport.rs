//! HTTP transport seam.
//!
//! The batching and parsing logic never talks to an HTTP stack directly; it
//! goes through the [`Transport`] trait, which performs one GET round-trip
//! and reports status, body, and headers without interpreting any of them.
//! Production code uses [`HttpTransport`] (reqwest); tests inject stubs.

pub mod http;

pub use http::{HttpTransport, TransportError};

use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Injected collaborator responsible for performing the actual network call.
///
/// Implementations must not interpret status codes or parse bodies; both are
/// the client's job. Transport-level retries, pooling, and TLS are entirely
/// the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET request against the service endpoint with the given
    /// query parameters, in order.
    async fn get(&self, params: &[(String, String)]) -> crate::Result<TransportReply>;
}

/// Raw outcome of one transport round-trip.
#[derive(Debug, Clone)]
pub struct TransportReply {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Response body, undecoded.
    pub body: String,
    /// Response headers as received.
    pub headers: HeaderMap,
}
