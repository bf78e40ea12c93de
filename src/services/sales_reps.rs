use validator::Validate;

use crate::domain::sales_rep::SalesRep;
use crate::dto::sales_reps::{ListSalesRepsQuery, SearchQuery};
use crate::pagination::Paginated;
use crate::repository::DatasetReader;
use crate::search;
use crate::services::{ServiceError, ServiceResult};

/// Loads the dataset and returns one page of (optionally filtered) records.
pub fn list_sales_reps<R>(
    repo: &R,
    query: ListSalesRepsQuery,
) -> ServiceResult<Paginated<SalesRep>>
where
    R: DatasetReader + ?Sized,
{
    if let Err(err) = query.validate() {
        return Err(ServiceError::Validation(err.to_string()));
    }

    let dataset = repo.load()?;

    let filter = query.to_filter();
    let reps = if filter.is_active() {
        search::filter_reps(&dataset.sales_reps, &filter)
    } else {
        dataset.sales_reps
    };

    Ok(Paginated::new(reps, query.page, query.page_size))
}

/// Free-text search across the whole collection.
pub fn search_sales_reps<R>(repo: &R, query: SearchQuery) -> ServiceResult<Vec<SalesRep>>
where
    R: DatasetReader + ?Sized,
{
    let dataset = repo.load()?;
    Ok(search::search_reps(&dataset.sales_reps, &query.query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sales_rep::Dataset;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_dataset() -> Dataset {
        Dataset {
            sales_reps: vec![
                SalesRep {
                    id: "1".to_string(),
                    name: "John Doe".to_string(),
                    role: "Sales Manager".to_string(),
                    region: "North America".to_string(),
                    skills: vec!["Negotiation".to_string(), "Leadership".to_string()],
                    ..SalesRep::default()
                },
                SalesRep {
                    id: "2".to_string(),
                    name: "Jane Smith".to_string(),
                    role: "Account Executive".to_string(),
                    region: "Europe".to_string(),
                    skills: vec!["Prospecting".to_string(), "CRM".to_string()],
                    ..SalesRep::default()
                },
            ],
        }
    }

    fn list_query() -> ListSalesRepsQuery {
        ListSalesRepsQuery {
            name: None,
            role: None,
            region: None,
            skills: None,
            page: 1,
            page_size: 10,
        }
    }

    #[test]
    fn test_list_unfiltered() {
        let mut repo = MockRepository::new();
        repo.expect_load().returning(|| Ok(sample_dataset()));

        let page = list_sales_reps(&repo, list_query()).unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total_items, 2);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_list_with_field_filter() {
        let mut repo = MockRepository::new();
        repo.expect_load().returning(|| Ok(sample_dataset()));

        let query = ListSalesRepsQuery {
            name: Some("john".to_string()),
            ..list_query()
        };
        let page = list_sales_reps(&repo, query).unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "John Doe");
        assert_eq!(page.meta.total_items, 1);
    }

    #[test]
    fn test_list_rejects_page_size_out_of_range() {
        let mut repo = MockRepository::new();
        repo.expect_load().times(0);

        let query = ListSalesRepsQuery {
            page_size: 101,
            ..list_query()
        };
        let err = list_sales_reps(&repo, query).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_list_rejects_page_zero() {
        let mut repo = MockRepository::new();
        repo.expect_load().times(0);

        let query = ListSalesRepsQuery {
            page: 0,
            ..list_query()
        };
        let err = list_sales_reps(&repo, query).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_list_propagates_repository_error() {
        let mut repo = MockRepository::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Unavailable("gone".to_string())));

        let err = list_sales_reps(&repo, list_query()).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repository(RepositoryError::Unavailable(_))
        ));
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let mut repo = MockRepository::new();
        repo.expect_load().returning(|| Ok(sample_dataset()));

        let query = SearchQuery {
            query: String::new(),
        };
        let reps = search_sales_reps(&repo, query).unwrap();
        assert_eq!(reps.len(), 2);
    }

    #[test]
    fn test_search_matches_skill() {
        let mut repo = MockRepository::new();
        repo.expect_load().returning(|| Ok(sample_dataset()));

        let query = SearchQuery {
            query: "crm".to_string(),
        };
        let reps = search_sales_reps(&repo, query).unwrap();
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].name, "Jane Smith");
    }
}
