use serde::{Deserialize, Serialize};

use crate::domain::sales_rep::Dataset;

/// Request body for the AI question endpoint.
///
/// Structurally invalid `data` payloads are rejected at the boundary by the
/// JSON extractor; a supplied object without a `salesReps` key deserializes
/// to an empty collection.
#[derive(Debug, Deserialize)]
pub struct AiQuery {
    /// The user's question about the sales data.
    pub question: String,
    /// Optional dataset to analyze; the backing file is used when absent.
    pub data: Option<Dataset>,
}

/// Response payload carrying the model's cleaned answer.
#[derive(Debug, Serialize)]
pub struct AiAnswer {
    pub answer: String,
}
