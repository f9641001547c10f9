//! API domain and version
//!
//! A [`Version`] pairs a domain (`https://api.twilio.com`) with a version
//! segment (`2010-04-01`). Every resource list and context composes on top of
//! the operations here: limits resolution, streaming, listing, single pages,
//! and the fetch / create / update / remove calls on instances.

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::{
    collect, Limits, ListOptions, Page, PageDecoder, PageFetcher, PageOptions, RecordStream,
};
use crate::types::{JsonValue, Method, ParamsExt, StringMap};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// One versioned API on one domain
#[derive(Clone)]
pub struct Version {
    transport: Arc<dyn Transport>,
    domain: Url,
    version: String,
}

impl Version {
    /// Create a version from a domain URL and version segment
    pub fn new(transport: Arc<dyn Transport>, domain: &str, version: impl Into<String>) -> Result<Self> {
        Ok(Self {
            transport,
            domain: Url::parse(domain)?,
            version: version.into(),
        })
    }

    /// The API domain
    pub fn domain(&self) -> &Url {
        &self.domain
    }

    /// The version segment
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Prefix a resource path with the version segment
    pub fn relative_uri(&self, uri: &str) -> String {
        format!(
            "/{}/{}",
            self.version.trim_matches('/'),
            uri.trim_start_matches('/')
        )
    }

    /// Absolute URL for a resource path
    pub fn absolute_url(&self, uri: &str) -> Result<String> {
        Ok(self.domain.join(&self.relative_uri(uri))?.into())
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Resolve caller limits against the API's page size rules
    pub fn read_limits(&self, options: &ListOptions) -> Result<Limits> {
        options.resolve()
    }

    /// Fetch one page with explicit paging parameters
    pub async fn page<T>(
        &self,
        decoder: Arc<dyn PageDecoder<Record = T>>,
        uri: &str,
        mut params: StringMap,
        options: &PageOptions,
    ) -> Result<Page<T>> {
        options.apply(&mut params);
        let url = self.absolute_url(uri)?;
        self.fetcher(decoder).fetch_first(&url, &params).await
    }

    /// Fetch the page at a URL previously handed out by the API
    pub async fn get_page<T>(
        &self,
        decoder: Arc<dyn PageDecoder<Record = T>>,
        url: &str,
    ) -> Result<Page<T>> {
        self.fetcher(decoder).fetch_first(url, &StringMap::new()).await
    }

    /// Stream records from a listing.
    ///
    /// The first page is fetched before returning so that bad URIs and
    /// credentials fail here; later pages are fetched as the stream is
    /// polled. A zero limit returns an empty stream without any request.
    pub async fn stream<T>(
        &self,
        decoder: Arc<dyn PageDecoder<Record = T>>,
        uri: &str,
        mut params: StringMap,
        options: &ListOptions,
    ) -> Result<RecordStream<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        let limits = self.read_limits(options)?;
        let fetcher = self.fetcher(decoder);

        if limits.limit == Some(0) {
            return Ok(RecordStream::empty(fetcher, limits.limit));
        }

        params.set("PageSize", limits.page_size);
        let url = self.absolute_url(uri)?;
        debug!(
            "Streaming {} (limit: {:?}, page size: {}, page limit: {:?})",
            url, limits.limit, limits.page_size, limits.page_limit
        );

        let first = fetcher.fetch_first(&url, &params).await?;
        Ok(RecordStream::with_limits(fetcher, first, &limits))
    }

    /// Read a listing into memory, at most `limit` records
    pub async fn list<T>(
        &self,
        decoder: Arc<dyn PageDecoder<Record = T>>,
        uri: &str,
        params: StringMap,
        options: &ListOptions,
    ) -> Result<Vec<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        collect(self.stream(decoder, uri, params, options).await?).await
    }

    // ========================================================================
    // Instances
    // ========================================================================

    /// GET one instance
    pub async fn fetch<R: DeserializeOwned>(&self, uri: &str) -> Result<R> {
        let payload = self.request(Method::GET, uri, &StringMap::new()).await?;
        decode_instance(uri, payload)
    }

    /// POST to a list, creating an instance
    pub async fn create<R: DeserializeOwned>(&self, uri: &str, params: &StringMap) -> Result<R> {
        let payload = self.request(Method::POST, uri, params).await?;
        decode_instance(uri, payload)
    }

    /// POST to an instance, updating it
    pub async fn update<R: DeserializeOwned>(&self, uri: &str, params: &StringMap) -> Result<R> {
        let payload = self.request(Method::POST, uri, params).await?;
        decode_instance(uri, payload)
    }

    /// DELETE an instance; `true` once the API accepted the removal
    pub async fn remove(&self, uri: &str) -> Result<bool> {
        self.request(Method::DELETE, uri, &StringMap::new()).await?;
        Ok(true)
    }

    async fn request(&self, method: Method, uri: &str, params: &StringMap) -> Result<JsonValue> {
        let url = self.absolute_url(uri)?;
        debug!("{} {}", method, url);
        self.transport.execute(method, &url, params).await
    }

    fn fetcher<T>(&self, decoder: Arc<dyn PageDecoder<Record = T>>) -> PageFetcher<T> {
        PageFetcher::new(Arc::clone(&self.transport), self.domain.clone(), decoder)
    }
}

fn decode_instance<R: DeserializeOwned>(uri: &str, payload: JsonValue) -> Result<R> {
    serde_json::from_value(payload)
        .map_err(|e| Error::decode(format!("instance from {uri}: {e}")))
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Version")
            .field("domain", &self.domain.as_str())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
