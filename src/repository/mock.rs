//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::sales_rep::Dataset;
use crate::repository::DatasetReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl DatasetReader for Repository {
        fn load(&self) -> RepositoryResult<Dataset>;
    }
}
