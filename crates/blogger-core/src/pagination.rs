//! Pagination helper - turns list query parameters plus a total count into
//! skip/limit/sort instructions and page metadata.

use blogger_shared::Paginated;
use blogger_shared::dto::PaginationParams;

pub use blogger_shared::dto::SortDirection;

pub const DEFAULT_PAGE_NUMBER: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const DEFAULT_SORT_FIELD: &str = "createdAt";
/// Largest skip or page size a store is asked for; SQL offsets are signed 64-bit.
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Field and direction a page is ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for SortBy {
    fn default() -> Self {
        Self {
            field: DEFAULT_SORT_FIELD.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// What a repository needs to fetch one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
    pub sort: SortBy,
}

/// Normalised pagination for one list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCalc {
    pub skip: u64,
    pub page_size: u64,
    pub sort_by: SortBy,
    pub pages_count: u64,
    pub page_number: u64,
}

/// Compute pagination for `params` over `total_count` matching records.
///
/// Missing or zero page numbers and sizes fall back to the defaults.
pub fn paginate(params: &PaginationParams, total_count: u64) -> PaginationCalc {
    let page_number = params
        .page_number
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_NUMBER);
    let page_size = params
        .page_size
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_WINDOW);

    let field = params
        .sort_by
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_SORT_FIELD);

    PaginationCalc {
        skip: (page_number - 1).saturating_mul(page_size).min(MAX_WINDOW),
        page_size,
        sort_by: SortBy {
            field: field.to_string(),
            direction: params.sort_direction.unwrap_or_default(),
        },
        pages_count: total_count.div_ceil(page_size),
        page_number,
    }
}

impl PaginationCalc {
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            skip: self.skip,
            limit: self.page_size,
            sort: self.sort_by.clone(),
        }
    }

    /// Wrap the fetched items with this page's metadata.
    pub fn into_page<T>(self, total_count: u64, items: Vec<T>) -> Paginated<T> {
        Paginated {
            pages_count: self.pages_count,
            page: self.page_number,
            page_size: self.page_size,
            total_count,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page_number: Option<u64>, page_size: Option<u64>) -> PaginationParams {
        PaginationParams {
            page_number,
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let calc = paginate(&PaginationParams::default(), 25);

        assert_eq!(calc.page_number, 1);
        assert_eq!(calc.page_size, 10);
        assert_eq!(calc.skip, 0);
        assert_eq!(calc.pages_count, 3);
        assert_eq!(calc.sort_by, SortBy::default());
    }

    #[test]
    fn test_zero_total_has_zero_pages() {
        for (page, size) in [(None, None), (Some(3), Some(7)), (Some(1), Some(1))] {
            assert_eq!(paginate(&params(page, size), 0).pages_count, 0);
        }
    }

    #[test]
    fn test_pages_count_is_ceiling() {
        for (total, size, expected) in [(1, 10, 1), (10, 10, 1), (11, 10, 2), (99, 7, 15)] {
            let calc = paginate(&params(None, Some(size)), total);
            assert_eq!(calc.pages_count, expected, "total={total} size={size}");
        }
    }

    #[test]
    fn test_skip_follows_page_number() {
        let calc = paginate(&params(Some(3), Some(5)), 100);
        assert_eq!(calc.skip, 10);
        assert_eq!(calc.page_request().limit, 5);
    }

    #[test]
    fn test_zero_inputs_are_clamped() {
        let calc = paginate(&params(Some(0), Some(0)), 4);
        assert_eq!(calc.page_number, 1);
        assert_eq!(calc.page_size, 10);
        assert_eq!(calc.skip, 0);
    }

    #[test]
    fn test_huge_pages_stay_within_sql_range() {
        let calc = paginate(&params(Some(1_000_000_000_000_000_000), Some(10)), 3);
        assert_eq!(calc.skip, MAX_WINDOW);
        assert_eq!(calc.page_size, 10);

        let calc = paginate(&params(Some(2), Some(u64::MAX)), 3);
        assert_eq!(calc.page_size, MAX_WINDOW);
        assert_eq!(calc.skip, MAX_WINDOW);
        assert_eq!(calc.pages_count, 1);
    }

    #[test]
    fn test_sort_resolution() {
        let calc = paginate(
            &PaginationParams {
                sort_by: Some("name".to_string()),
                sort_direction: Some(SortDirection::Asc),
                ..Default::default()
            },
            1,
        );
        assert_eq!(calc.sort_by.field, "name");
        assert_eq!(calc.sort_by.direction, SortDirection::Asc);

        let blank = paginate(
            &PaginationParams {
                sort_by: Some("  ".to_string()),
                ..Default::default()
            },
            1,
        );
        assert_eq!(blank.sort_by.field, DEFAULT_SORT_FIELD);
    }

    #[test]
    fn test_into_page_carries_metadata() {
        let page = paginate(&params(Some(2), Some(2)), 5).into_page(5, vec!["c", "d"]);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.pages_count, 3);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.items, vec!["c", "d"]);
    }
}
