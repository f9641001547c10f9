//! Limits resolution
//!
//! Reconciles the caller's requested record limit and page size with the
//! page sizes the API itself defaults to and enforces.

use crate::error::{Error, Result};

/// Page size the API uses when none is requested
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the API will serve
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Effective bounds for one list or stream operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of records, `None` for unbounded
    pub limit: Option<u64>,
    /// Records requested per page, always within `1..=MAX_PAGE_SIZE`
    pub page_size: u32,
    /// Maximum number of page fetches, `ceil(limit / page_size)`
    pub page_limit: Option<u64>,
}

impl Limits {
    /// Resolve requested limits.
    ///
    /// Without a page size the smaller of `limit` and [`DEFAULT_PAGE_SIZE`] is
    /// used (never below one). An explicit page size is capped at
    /// [`MAX_PAGE_SIZE`]. A negative limit or a non-positive page size is an
    /// `InvalidArgument`.
    pub fn resolve(limit: Option<i64>, page_size: Option<i64>) -> Result<Self> {
        let limit = match limit {
            Some(l) if l < 0 => {
                return Err(Error::invalid_argument(format!(
                    "limit must be non-negative, got {l}"
                )));
            }
            Some(l) => Some(l as u64),
            None => None,
        };

        let page_size = match page_size {
            Some(ps) if ps <= 0 => {
                return Err(Error::invalid_argument(format!(
                    "page_size must be positive, got {ps}"
                )));
            }
            Some(ps) => ps.min(i64::from(MAX_PAGE_SIZE)) as u32,
            None => {
                let default = u64::from(DEFAULT_PAGE_SIZE);
                limit.map_or(default, |l| l.min(default)).max(1) as u32
            }
        };

        let page_limit = limit.map(|l| l.div_ceil(u64::from(page_size)));

        Ok(Self {
            limit,
            page_size,
            page_limit,
        })
    }

    /// Limits for an unbounded read at the default page size
    pub fn unbounded() -> Self {
        Self {
            limit: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_limit: None,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Caller-facing options for `stream` and `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Upper bound on the number of records returned
    pub limit: Option<i64>,
    /// Records to request per page
    pub page_size: Option<i64>,
}

impl ListOptions {
    /// Create options with no limit and the default page size
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record limit
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Resolve into effective limits
    pub fn resolve(&self) -> Result<Limits> {
        Limits::resolve(self.limit, self.page_size)
    }
}
