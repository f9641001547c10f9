//! Lazy record streaming across pages
//!
//! [`RecordStream`] drains the page it holds one record at a time and only
//! fetches the next page when the current one is exhausted and the record and
//! page budgets allow it. Budgets are checked at page boundaries, so a page
//! that crosses the record limit is still yielded in full.

use super::fetcher::PageFetcher;
use super::limits::Limits;
use super::page::Page;
use crate::error::Result;
use futures::future::BoxFuture;
use futures::Stream;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tracing::debug;

/// Why a stream stopped producing records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// At least `limit` records were yielded
    LimitReached,
    /// `page_limit` pages were fetched
    PageLimitReached,
    /// The last page had no next-page locator
    Exhausted,
    /// A page fetch failed
    Failed,
}

type NextPage<T> = BoxFuture<'static, Result<Option<Page<T>>>>;

enum State<T> {
    /// Yielding records from the buffered page
    Draining,
    /// Waiting on the next page
    Fetching(NextPage<T>),
    Done,
}

/// Single-pass stream of records over a paginated listing
pub struct RecordStream<T> {
    fetcher: PageFetcher<T>,
    page: Option<Page<T>>,
    position: usize,
    yielded: u64,
    pages_fetched: u64,
    limit: Option<u64>,
    page_limit: Option<u64>,
    state: State<T>,
    stop_reason: Option<StopReason>,
}

impl<T> RecordStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Stream records starting at `first_page`, which counts as one fetched
    /// page against `page_limit`.
    pub fn new(
        fetcher: PageFetcher<T>,
        first_page: Page<T>,
        limit: Option<u64>,
        page_limit: Option<u64>,
    ) -> Self {
        let mut stream = Self {
            fetcher,
            page: Some(first_page),
            position: 0,
            yielded: 0,
            pages_fetched: 1,
            limit,
            page_limit,
            state: State::Draining,
            stop_reason: None,
        };

        if limit == Some(0) {
            stream.finish(StopReason::LimitReached);
        }
        stream
    }

    /// Stream records starting at `first_page` bounded by resolved limits
    pub fn with_limits(fetcher: PageFetcher<T>, first_page: Page<T>, limits: &Limits) -> Self {
        Self::new(fetcher, first_page, limits.limit, limits.page_limit)
    }

    /// A stream that yields nothing and never fetches
    pub fn empty(fetcher: PageFetcher<T>, limit: Option<u64>) -> Self {
        let mut stream = Self {
            fetcher,
            page: None,
            position: 0,
            yielded: 0,
            pages_fetched: 0,
            limit,
            page_limit: None,
            state: State::Draining,
            stop_reason: None,
        };
        stream.finish(StopReason::LimitReached);
        stream
    }

    /// Record limit this stream was created with
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Page limit this stream was created with
    pub fn page_limit(&self) -> Option<u64> {
        self.page_limit
    }

    /// Records yielded so far
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    /// Pages fetched so far, the first page included
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// Why the stream ended; `None` while it can still produce records
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Decide at a page boundary whether to stop
    fn boundary(&self) -> Option<StopReason> {
        if self.limit.is_some_and(|limit| self.yielded >= limit) {
            return Some(StopReason::LimitReached);
        }
        if self
            .page_limit
            .is_some_and(|page_limit| self.pages_fetched >= page_limit)
        {
            return Some(StopReason::PageLimitReached);
        }
        if !self.page.as_ref().is_some_and(Page::has_next) {
            return Some(StopReason::Exhausted);
        }
        None
    }

    fn finish(&mut self, reason: StopReason) {
        debug!(
            "Stream stopped ({:?}) after {} records from {} pages",
            reason, self.yielded, self.pages_fetched
        );
        self.page = None;
        self.state = State::Done;
        self.stop_reason = Some(reason);
    }

    fn start_fetch(&mut self) {
        let fetcher = self.fetcher.clone();
        let Some(previous) = self.page.take() else {
            self.finish(StopReason::Exhausted);
            return;
        };
        self.state = State::Fetching(Box::pin(async move { fetcher.fetch_next(&previous).await }));
    }
}

impl<T> Stream for RecordStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            match &mut this.state {
                State::Done => return Poll::Ready(None),
                State::Fetching(next) => match ready!(next.as_mut().poll(cx)) {
                    Ok(Some(page)) => {
                        this.pages_fetched += 1;
                        this.page = Some(page);
                        this.position = 0;
                        this.state = State::Draining;
                    }
                    Ok(None) => this.finish(StopReason::Exhausted),
                    Err(e) => {
                        this.finish(StopReason::Failed);
                        return Poll::Ready(Some(Err(e)));
                    }
                },
                State::Draining => {
                    let record = this
                        .page
                        .as_ref()
                        .and_then(|page| page.records().get(this.position))
                        .cloned();

                    if let Some(record) = record {
                        this.position += 1;
                        this.yielded += 1;
                        return Poll::Ready(Some(Ok(record)));
                    }

                    match this.boundary() {
                        Some(reason) => this.finish(reason),
                        None => this.start_fetch(),
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self
            .page
            .as_ref()
            .map_or(0, |page| page.len().saturating_sub(self.position));

        match self.state {
            State::Done => (0, Some(0)),
            _ => (buffered, None),
        }
    }
}

impl<T> std::fmt::Debug for RecordStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStream")
            .field("yielded", &self.yielded)
            .field("pages_fetched", &self.pages_fetched)
            .field("limit", &self.limit)
            .field("page_limit", &self.page_limit)
            .field("stop_reason", &self.stop_reason)
            .finish_non_exhaustive()
    }
}
