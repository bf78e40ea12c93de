//! Substring search and filtering over sales representative records.

use std::collections::HashSet;

use crate::domain::sales_rep::SalesRep;

/// Case-insensitive substring containment. `needle` must already be
/// lowercased.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Free-text search: a record matches when the query is a case-insensitive
/// substring of its name, role or region, or of any skill entry.
///
/// An empty query returns the input unchanged. Original order is preserved
/// and a record contributes at most once even when several fields match,
/// tracked by `id`.
pub fn search_reps(reps: &[SalesRep], query: &str) -> Vec<SalesRep> {
    if query.is_empty() {
        return reps.to_vec();
    }
    let query = query.to_lowercase();

    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut results = Vec::new();

    for rep in reps {
        if seen_ids.contains(rep.id.as_str()) {
            continue;
        }

        let field_match = contains_ci(&rep.name, &query)
            || contains_ci(&rep.role, &query)
            || contains_ci(&rep.region, &query);

        if field_match || rep.skills.iter().any(|skill| contains_ci(skill, &query)) {
            seen_ids.insert(rep.id.as_str());
            results.push(rep.clone());
        }
    }

    results
}

/// Per-field criteria combined with AND semantics by [`filter_reps`].
///
/// Empty strings count as omitted, matching how the HTTP layer forwards
/// blank query parameters.
#[derive(Clone, Debug, Default)]
pub struct RepFilter {
    pub name: Option<String>,
    pub role: Option<String>,
    pub region: Option<String>,
    pub skills: Option<String>,
}

impl RepFilter {
    /// Whether any non-empty criterion was supplied.
    pub fn is_active(&self) -> bool {
        [&self.name, &self.role, &self.region, &self.skills]
            .into_iter()
            .any(|c| c.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// Field-parameterized filter: every supplied non-empty criterion must match
/// its own field (any entry of the skills list for `skills`); omitted
/// criteria impose no constraint.
///
/// This is intentionally distinct from [`search_reps`], which combines the
/// fields with OR.
pub fn filter_reps(reps: &[SalesRep], filter: &RepFilter) -> Vec<SalesRep> {
    let criterion =
        |c: &Option<String>| c.as_deref().filter(|s| !s.is_empty()).map(str::to_lowercase);

    let name = criterion(&filter.name);
    let role = criterion(&filter.role);
    let region = criterion(&filter.region);
    let skills = criterion(&filter.skills);

    reps.iter()
        .filter(|rep| {
            name.as_deref().is_none_or(|q| contains_ci(&rep.name, q))
                && role.as_deref().is_none_or(|q| contains_ci(&rep.role, q))
                && region.as_deref().is_none_or(|q| contains_ci(&rep.region, q))
                && skills
                    .as_deref()
                    .is_none_or(|q| rep.skills.iter().any(|skill| contains_ci(skill, q)))
        })
        .cloned()
        .collect()
}
