use serde::Serialize;

/// Navigation metadata derived from a collection and the requested page.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of a collection together with its derived metadata.
#[derive(Clone, Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Slices `items` into the requested page.
    ///
    /// An out-of-range page yields an empty `data` sequence, not an error.
    /// Callers enforce `page >= 1` and `1 <= page_size <= 100` at the
    /// request boundary.
    pub fn new(items: Vec<T>, page: usize, page_size: usize) -> Self {
        let total_items = items.len();
        let total_pages = total_items.div_ceil(page_size);

        let start = page.saturating_sub(1).saturating_mul(page_size);
        let data: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

        Self {
            data,
            meta: PageMeta {
                page,
                page_size,
                total_items,
                total_pages,
                has_next: page < total_pages,
                has_prev: page > 1,
            },
        }
    }
}
