/// Window into an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    /// Build a page window from a 1-based page number and a page size.
    ///
    /// Page numbers below 1, or so large the offset overflows, are treated
    /// as 1; sizes outside `1..=MAX_LIMIT` fall back to `DEFAULT_LIMIT`.
    pub fn new(page: i64, limit: i64) -> Self {
        let limit = if (1..=Self::MAX_LIMIT).contains(&limit) {
            limit
        } else {
            Self::DEFAULT_LIMIT
        };

        let offset = (page.max(1) - 1).checked_mul(limit).unwrap_or(0);

        Self { limit, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}
