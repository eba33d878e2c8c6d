use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 { 1 }
fn default_per_page() -> u64 { 20 }

const MAX_PER_PAGE: u64 = 100;

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Page numbers start at 1; page 0 is read as page 1.
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    pub fn offset(&self) -> i64 {
        let rows = (self.page() - 1).saturating_mul(self.limit_u64());
        i64::try_from(rows).unwrap_or(i64::MAX)
    }

    /// Page size as diesel expects it, clamped to `1..=100`.
    pub fn limit(&self) -> i64 {
        self.limit_u64() as i64
    }

    fn limit_u64(&self) -> u64 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1, per_page: 20 }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, params: &PaginationParams) -> Self {
        let per_page = params.limit_u64();
        let total_pages = total.div_ceil(per_page);
        Self {
            items,
            total,
            page: params.page(),
            per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_starts_at_zero_for_first_page() {
        let params = PaginationParams::new(1, 10);
        assert_eq!(params.offset(), 0);
        assert_eq!(PaginationParams::new(3, 10).offset(), 20);
        assert_eq!(PaginationParams::new(0, 10).offset(), 0);
    }

    #[test]
    fn huge_page_offset_saturates_instead_of_wrapping() {
        let params = PaginationParams::new(u64::MAX, 2);
        assert_eq!(params.offset(), i64::MAX);

        let params = PaginationParams::new(u64::MAX / 2, 100);
        assert_eq!(params.offset(), i64::MAX);
    }

    #[test]
    fn page_zero_is_reported_as_first_page() {
        let params = PaginationParams::new(0, 10);
        assert_eq!(params.page(), 1);
        let page = Paginated::new(vec![1], 1, &params);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(PaginationParams::new(1, 500).limit(), 100);
        assert_eq!(PaginationParams::new(1, 0).limit(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PaginationParams::new(1, 20);
        let page = Paginated::new(vec![1, 2, 3], 41, &params);
        assert_eq!(page.total_pages, 3);

        let empty: Paginated<u8> = Paginated::new(vec![], 0, &params);
        assert_eq!(empty.total_pages, 0);
    }
}
