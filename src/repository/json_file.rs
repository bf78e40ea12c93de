use std::fs;
use std::path::PathBuf;

use crate::domain::sales_rep::Dataset;
use crate::repository::DatasetReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Dataset accessor backed by a JSON file on disk.
///
/// The file is an external read-only resource from this service's
/// perspective. No caching and no locking: concurrent handlers each read
/// their own copy.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetReader for JsonFileRepository {
    fn load(&self) -> RepositoryResult<Dataset> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| RepositoryError::Unavailable(format!("{}: {e}", self.path.display())))?;

        serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::Malformed(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Seek, Write};

    use tempfile::NamedTempFile;

    use super::*;

    fn data_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_parses_dataset() {
        let file = data_file(
            r#"{"salesReps": [{"id": "1", "name": "John Doe", "role": "Sales Manager",
                "region": "North America", "skills": ["Negotiation"],
                "deals": [{"client": "ABC Corp", "value": 50000, "status": "Closed Won"}],
                "clients": [{"name": "ABC Corp", "industry": "Technology", "contact": "contact@abc.com"}]}]}"#,
        );

        let repo = JsonFileRepository::new(file.path());
        let dataset = repo.load().unwrap();

        assert_eq!(dataset.sales_reps.len(), 1);
        let rep = &dataset.sales_reps[0];
        assert_eq!(rep.name, "John Doe");
        assert_eq!(rep.deals[0].value, 50000.0);
        assert_eq!(rep.clients[0].industry, "Technology");
    }

    #[test]
    fn test_load_rereads_on_every_call() {
        let mut file = data_file(r#"{"salesReps": []}"#);
        let repo = JsonFileRepository::new(file.path());
        assert!(repo.load().unwrap().sales_reps.is_empty());

        file.as_file_mut().set_len(0).unwrap();
        file.rewind().unwrap();
        file.write_all(br#"{"salesReps": [{"id": "1"}]}"#).unwrap();
        assert_eq!(repo.load().unwrap().sales_reps.len(), 1);
    }

    #[test]
    fn test_load_missing_salesreps_key_defaults_to_empty() {
        let file = data_file("{}");
        let repo = JsonFileRepository::new(file.path());
        assert!(repo.load().unwrap().sales_reps.is_empty());
    }

    #[test]
    fn test_load_missing_record_fields_default() {
        let file = data_file(r#"{"salesReps": [{"id": "7"}]}"#);
        let repo = JsonFileRepository::new(file.path());

        let dataset = repo.load().unwrap();
        let rep = &dataset.sales_reps[0];
        assert_eq!(rep.id, "7");
        assert!(rep.name.is_empty());
        assert!(rep.skills.is_empty());
        assert!(rep.deals.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let repo = JsonFileRepository::new("/nonexistent/dummyData.json");
        let err = repo.load().unwrap_err();
        assert!(matches!(err, RepositoryError::Unavailable(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let file = data_file("not json at all");
        let repo = JsonFileRepository::new(file.path());
        let err = repo.load().unwrap_err();
        assert!(matches!(err, RepositoryError::Malformed(_)));
    }
}
