//! Framework-free operations behind the HTTP handlers.
//!
//! Services are generic over the repository and gateway traits so they can
//! be exercised against mocks without a server or network.

use thiserror::Error;

use crate::llm::LlmError;
use crate::repository::errors::RepositoryError;

pub mod ai;
pub mod sales_reps;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rejected request parameters or payload; surfaces as 400.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
