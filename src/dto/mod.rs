//! DTO modules that bridge services with the HTTP API.

use serde::Serialize;

pub mod ai;
pub mod sales_reps;

/// JSON error body returned by every endpoint on failure.
#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: String,
}
