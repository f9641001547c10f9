//! Page fetching
//!
//! Retrieves the first page of a listing and follows next-page locators.

use super::page::{Page, PageDecoder};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{Method, StringMap};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Fetches and decodes pages for one listing
pub struct PageFetcher<T> {
    transport: Arc<dyn Transport>,
    domain: Url,
    decoder: Arc<dyn PageDecoder<Record = T>>,
}

impl<T> PageFetcher<T> {
    /// Create a fetcher against `domain` (e.g. `https://api.twilio.com`)
    pub fn new(
        transport: Arc<dyn Transport>,
        domain: Url,
        decoder: Arc<dyn PageDecoder<Record = T>>,
    ) -> Self {
        Self {
            transport,
            domain,
            decoder,
        }
    }

    /// Base URL relative locators are resolved against
    pub fn domain(&self) -> &Url {
        &self.domain
    }

    /// Fetch the first page of a listing.
    ///
    /// `uri` may be absolute or relative to the domain. `params` carries
    /// filters and `PageSize`.
    pub async fn fetch_first(&self, uri: &str, params: &StringMap) -> Result<Page<T>> {
        let url = self.resolve(uri)?;
        self.fetch(&url, params).await
    }

    /// Fetch the page following `previous`.
    ///
    /// Returns `None` without touching the network when `previous` has no
    /// next-page locator. The locator already encodes filters, page size and
    /// page token, so no params are added. An absolute locator is requested
    /// byte for byte; a relative one is joined onto the domain.
    pub async fn fetch_next(&self, previous: &Page<T>) -> Result<Option<Page<T>>> {
        let Some(locator) = previous.next_page_uri() else {
            return Ok(None);
        };

        let url = self.resolve(locator)?;
        self.fetch(&url, &StringMap::new()).await.map(Some)
    }

    fn resolve(&self, uri: &str) -> Result<String> {
        if Url::parse(uri).is_ok() {
            return Ok(uri.to_string());
        }
        self.domain
            .join(uri)
            .map(String::from)
            .map_err(|e| Error::fetch_failed(uri, Error::InvalidUrl(e)))
    }

    async fn fetch(&self, url: &str, params: &StringMap) -> Result<Page<T>> {
        let payload = self
            .transport
            .execute(Method::GET, url, params)
            .await
            .map_err(|e| Error::fetch_failed(url, e))?;

        let page = self
            .decoder
            .decode_page(url, payload)
            .map_err(|e| Error::fetch_failed(url, e))?;

        debug!(
            "Fetched page {}: {} records, next: {}",
            url,
            page.len(),
            page.next_page_uri().unwrap_or("none")
        );

        Ok(page)
    }
}

impl<T> Clone for PageFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            domain: self.domain.clone(),
            decoder: Arc::clone(&self.decoder),
        }
    }
}

impl<T> std::fmt::Debug for PageFetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("domain", &self.domain.as_str())
            .finish_non_exhaustive()
    }
}
