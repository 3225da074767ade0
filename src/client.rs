//! Client interface for the Agify age-prediction service.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod lookup;

pub use builder::AgifyClientBuilder;
pub use core::{AgifyClient, BATCH_LIMIT};
pub use lookup::LookupBuilder;
