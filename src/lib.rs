//! # agify-client
//!
//! Rust client for the [Agify.io](https://agify.io) web service, which
//! predicts the age of a person from their first name.
//!
//! ## Overview
//!
//! The service caps each request at [`BATCH_LIMIT`] (10) names, so this
//! client transparently splits an arbitrary input collection into
//! bounded-size batches, issues one GET request per batch, and stitches the
//! per-batch results back into a single ordered list. Correspondence between
//! requested names and returned records is preserved across batch
//! boundaries.
//!
//! ## Key Features
//!
//! - **Batched lookups**: [`AgifyClient::fetch_many`] handles inputs of any
//!   length with `ceil(n / 10)` sequential requests
//! - **Request builder**: [`LookupBuilder`] for country qualifiers and
//!   rate-limit header capture
//! - **Injected transport**: the [`transport::Transport`] trait decouples
//!   batching and parsing from the HTTP stack, making the client trivially
//!   testable with a stub transport
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agify_client::AgifyClient;
//!
//! #[tokio::main]
//! async fn main() -> agify_client::Result<()> {
//!     let client = AgifyClient::builder().build()?;
//!
//!     let record = client.fetch_one("Abraham", None).await?;
//!     println!("{}: {:?}", record.name, record.age);
//!
//!     let records = client
//!         .fetch_many(["Abraham", "Eufrassio", "Martino Delfino"], None)
//!         .await?;
//!     assert_eq!(records.len(), 3);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client implementation, builders, batched lookups |
//! | [`chunk`] | Bounded-size chunking of input sequences |
//! | [`transport`] | HTTP transport trait and reqwest implementation |
//! | [`types`] | Prediction records and response normalization |

pub mod chunk;
pub mod client;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{AgifyClient, AgifyClientBuilder, LookupBuilder, BATCH_LIMIT};
pub use transport::{HttpTransport, Transport, TransportError, TransportReply};
pub use types::{BatchResult, PredictionRecord};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
