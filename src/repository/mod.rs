use crate::domain::sales_rep::Dataset;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json_file;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read access to the sales representative dataset.
pub trait DatasetReader {
    /// Loads the dataset from its configured location.
    ///
    /// Every call re-reads the source; nothing is cached between requests,
    /// so edits to the backing file become visible on the next request.
    fn load(&self) -> RepositoryResult<Dataset>;
}
