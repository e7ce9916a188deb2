//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size for browse listings.
pub const DEFAULT_PAGE_SIZE: i64 = 25;
/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Limit clamped to `[1, MAX_PAGE_SIZE]`.
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Offset, never negative.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_clamping() {
        let none = PaginationParams::default();
        assert_eq!(none.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(none.offset(), 0);

        let wild = PaginationParams {
            limit: Some(10_000),
            offset: Some(-5),
        };
        assert_eq!(wild.limit(), MAX_PAGE_SIZE);
        assert_eq!(wild.offset(), 0);

        let zero = PaginationParams {
            limit: Some(0),
            offset: None,
        };
        assert_eq!(zero.limit(), 1);
    }
}
