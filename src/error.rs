use thiserror::Error;

/// Unified error type for the Agify client.
///
/// Every failure surfaces to the caller of
/// [`fetch_many`](crate::AgifyClient::fetch_many) /
/// [`fetch_one`](crate::AgifyClient::fetch_one); nothing is caught or
/// retried inside this layer. Retry policy belongs to the transport
/// collaborator or the application.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller passed an argument outside the library's contract
    /// (zero chunk limit, zero timeout, malformed base URL).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was invoked in a way its contract forbids, such as
    /// requesting header capture through a single-result lookup.
    #[error("invalid usage: {0}")]
    InvalidUsage(String),

    /// Network transport failure (connection refused, timeout, TLS).
    #[error("network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    /// The service answered 2xx with a body this client cannot interpret:
    /// unparseable JSON, an unexpected shape, or a record count that does
    /// not match the requested names.
    #[error("unexpected response format: {0}")]
    Format(String),

    /// The service answered with a non-2xx status code.
    #[error("service returned HTTP error code {status}")]
    Service {
        /// Numeric HTTP status of the failing request.
        status: u16,
    },
}
