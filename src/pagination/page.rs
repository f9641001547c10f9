//! Pages and page decoding
//!
//! A [`Page`] is one decoded list response: its records plus the locator of
//! the next page. Pages are immutable and cheap to clone; clones share the
//! same record buffer.

use crate::error::{Error, Result};
use crate::types::{JsonValue, ParamsExt, StringMap};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;

/// One fetched batch of records
#[derive(Debug)]
pub struct Page<T> {
    uri: String,
    records: Arc<[T]>,
    next_page_uri: Option<String>,
}

impl<T> Page<T> {
    /// Create a page from decoded records
    pub fn new(uri: impl Into<String>, records: Vec<T>, next_page_uri: Option<String>) -> Self {
        Self {
            uri: uri.into(),
            records: records.into(),
            next_page_uri,
        }
    }

    /// URI this page was fetched from
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Records in the order the API returned them
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Locator of the next page; `None` on the last page
    pub fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }

    /// Whether the API reported more data after this page
    pub fn has_next(&self) -> bool {
        self.next_page_uri.is_some()
    }
}

impl<T> Clone for Page<T> {
    fn clone(&self) -> Self {
        Self {
            uri: self.uri.clone(),
            records: Arc::clone(&self.records),
            next_page_uri: self.next_page_uri.clone(),
        }
    }
}

// ============================================================================
// Explicit paging parameters
// ============================================================================

/// Explicit pagination parameters for fetching a single page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Opaque token handed out by the API
    pub page_token: Option<String>,
    /// Page number; informational for the client
    pub page_number: Option<u32>,
    /// Records per page
    pub page_size: Option<u32>,
}

impl PageOptions {
    /// Create empty page options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options requesting a given page size
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Set the page token
    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Set the page number
    #[must_use]
    pub fn page_number(mut self, number: u32) -> Self {
        self.page_number = Some(number);
        self
    }

    /// Add the paging parameters to a request parameter map
    pub fn apply(&self, params: &mut StringMap) {
        params
            .set_opt("PageToken", self.page_token.as_deref())
            .set_opt("Page", self.page_number)
            .set_opt("PageSize", self.page_size);
    }
}

// ============================================================================
// Page decoding
// ============================================================================

/// Turns a raw list payload into a typed page
pub trait PageDecoder: Send + Sync {
    /// Record type produced by this decoder
    type Record;

    /// Decode the payload fetched from `uri`
    fn decode_page(&self, uri: &str, payload: JsonValue) -> Result<Page<Self::Record>>;
}

/// Decoder for the JSON list envelope used by the REST API.
///
/// Records live under a resource-specific key (`task_queues`,
/// `incoming_phone_numbers`, ...). The 2010 API reports the next page as a
/// top-level `next_page_uri`; newer APIs put `next_page_url` and the list key
/// in a `meta` object.
pub struct JsonPageDecoder<T> {
    key: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonPageDecoder<T> {
    /// Create a decoder reading records from `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            _record: PhantomData,
        }
    }

    /// The record list key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T: DeserializeOwned> PageDecoder for JsonPageDecoder<T> {
    type Record = T;

    fn decode_page(&self, uri: &str, mut payload: JsonValue) -> Result<Page<T>> {
        if !payload.is_object() {
            return Err(Error::decode(format!(
                "page payload from {uri} is not a JSON object"
            )));
        }

        let next_page_uri = next_locator(&payload);
        let list_key = payload
            .pointer("/meta/key")
            .and_then(JsonValue::as_str)
            .unwrap_or(&self.key)
            .to_string();

        let items = match payload.get_mut(&list_key).map(JsonValue::take) {
            Some(JsonValue::Array(items)) => items,
            Some(JsonValue::Null) | None => {
                return Err(Error::decode(format!(
                    "page payload from {uri} has no '{list_key}' list"
                )));
            }
            Some(_) => {
                return Err(Error::decode(format!(
                    "'{list_key}' in page payload from {uri} is not an array"
                )));
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| {
                    Error::decode(format!("record {index} of '{list_key}' from {uri}: {e}"))
                })
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Page::new(uri, records, next_page_uri))
    }
}

/// Read the next-page locator, treating null and empty strings as absent
fn next_locator(payload: &JsonValue) -> Option<String> {
    ["/next_page_uri", "/meta/next_page_url"]
        .iter()
        .filter_map(|pointer| payload.pointer(pointer).and_then(JsonValue::as_str))
        .find(|locator| !locator.is_empty())
        .map(str::to_string)
}
