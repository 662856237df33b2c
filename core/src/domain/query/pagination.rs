use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Coerce raw values into a usable page: page >= 1, 1 <= page_size <= 100.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        let page = self.normalized();
        u64::from(page.page - 1) * u64::from(page.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.normalized().page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_coerces_bounds() {
        assert_eq!(Pagination::new(0, 0).normalized(), Pagination::new(1, 1));
        assert_eq!(Pagination::new(3, 500).normalized(), Pagination::new(3, 100));
    }

    #[test]
    fn test_offset_and_limit() {
        let page = Pagination::new(3, 25);
        assert_eq!(page.offset(), 50);
        assert_eq!(page.limit(), 25);
        assert_eq!(Pagination::new(0, 10).offset(), 0);
    }
}
