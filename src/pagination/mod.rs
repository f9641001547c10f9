//! Pagination module
//!
//! Turns a chain of list responses into one lazy, bounded sequence of records.
//!
//! # Overview
//!
//! Data flows one way:
//!
//! ```text
//! Limits::resolve -> (PageFetcher -> Page)* -> RecordStream -> collect
//! ```
//!
//! [`Limits`] reconciles the caller's record limit and page size with the
//! API's defaults, [`PageFetcher`] retrieves and decodes pages and follows
//! next-page locators, [`RecordStream`] yields records one at a time while
//! fetching pages on demand, and [`collect`] drains a stream into a `Vec`.

mod collect;
mod fetcher;
mod limits;
mod page;
mod stream;

pub use collect::collect;
pub use fetcher::PageFetcher;
pub use limits::{Limits, ListOptions, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use page::{JsonPageDecoder, Page, PageDecoder, PageOptions};
pub use stream::{RecordStream, StopReason};
