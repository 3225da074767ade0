//! Core data types: prediction records, batch results, and the
//! object-or-array response shape decoded at the service boundary.

pub mod record;

pub use record::{BatchResult, PredictionRecord};
