//! Pagination math shared by all list endpoints.
//!
//! Pages are 1-based on the wire. Pagination only applies when the caller
//! provides both `page` and `limit`; otherwise list endpoints return the
//! full collection.

/// One page of domain objects with the metadata needed to render pagers.
#[derive(Debug)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// Result of a list operation: the full collection, or one page of it.
#[derive(Debug)]
pub enum ListResult<T> {
    Full(Vec<T>),
    Paginated(Paginated<T>),
}

impl<T> ListResult<T> {
    /// Maps every contained item, preserving pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListResult<U> {
        match self {
            Self::Full(items) => ListResult::Full(items.into_iter().map(f).collect()),
            Self::Paginated(page) => ListResult::Paginated(Paginated {
                data: page.data.into_iter().map(f).collect(),
                total: page.total,
                page: page.page,
                limit: page.limit,
            }),
        }
    }
}

/// Converts 1-based page/limit query parameters into an offset/limit pair.
///
/// Returns `None` unless both parameters are present, which signals "no
/// pagination" to the repositories.
///
/// # Arguments
/// - `page` - 1-based page number from the query string
/// - `limit` - Page size from the query string
///
/// # Returns
/// - `Some((offset, limit))` - Both parameters present
/// - `None` - Pagination not requested
pub fn slice_params(page: Option<u64>, limit: Option<u64>) -> Option<(u64, u64)> {
    match (page, limit) {
        (Some(page), Some(limit)) => Some((page.saturating_sub(1) * limit, limit)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_two_starts_after_first_page() {
        assert_eq!(slice_params(Some(2), Some(10)), Some((10, 10)));
    }

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(slice_params(Some(1), Some(25)), Some((0, 25)));
    }

    #[test]
    fn missing_either_parameter_disables_pagination() {
        assert_eq!(slice_params(None, Some(10)), None);
        assert_eq!(slice_params(Some(2), None), None);
        assert_eq!(slice_params(None, None), None);
    }

    #[test]
    fn map_preserves_pagination_metadata() {
        let result = ListResult::Paginated(Paginated {
            data: vec![1, 2, 3],
            total: 30,
            page: 2,
            limit: 3,
        });

        match result.map(|n| n * 10) {
            ListResult::Paginated(page) => {
                assert_eq!(page.data, vec![10, 20, 30]);
                assert_eq!(page.total, 30);
                assert_eq!(page.page, 2);
                assert_eq!(page.limit, 3);
            }
            ListResult::Full(_) => panic!("expected paginated result"),
        }
    }
}
