use serde::Deserialize;
use validator::Validate;

use crate::search::RepFilter;

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

/// Query parameters accepted by the listing endpoint.
///
/// The four search terms are independent and combined with AND when more
/// than one is supplied.
#[derive(Debug, Deserialize, Validate)]
pub struct ListSalesRepsQuery {
    /// Search term applied to the representative name.
    pub name: Option<String>,
    /// Search term applied to the role.
    pub role: Option<String>,
    /// Search term applied to the region.
    pub region: Option<String>,
    /// Search term matched against any entry of the skills list.
    pub skills: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: usize,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    pub page_size: usize,
}

impl ListSalesRepsQuery {
    pub fn to_filter(&self) -> RepFilter {
        RepFilter {
            name: self.name.clone(),
            role: self.role.clone(),
            region: self.region.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Query parameters accepted by the free-text search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-form search string; empty returns the whole collection.
    #[serde(default)]
    pub query: String,
}
