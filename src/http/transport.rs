//! Request execution seam
//!
//! Everything above the HTTP layer talks to the API through [`Transport`],
//! which lets tests swap in scripted transports.

use crate::error::Result;
use crate::types::{JsonValue, Method, StringMap};
use async_trait::async_trait;

/// Executes one API request and returns the decoded JSON payload.
///
/// `uri` is absolute. For `GET` and `DELETE` the params travel in the query
/// string, for `POST` as a form-encoded body. An empty response body decodes
/// to `JsonValue::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, method: Method, uri: &str, params: &StringMap) -> Result<JsonValue>;
}
