use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing data source is missing or unreadable.
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    /// The backing data source exists but does not parse as a dataset.
    #[error("Malformed data source: {0}")]
    Malformed(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
