//! Account credentials
//!
//! Holds the account SID / auth token pair and applies it to outgoing requests.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::RequestBuilder;

/// Account SID and auth token used for HTTP Basic authentication
#[derive(Clone)]
pub struct Credentials {
    account_sid: String,
    auth_token: String,
    /// Precomputed `Basic base64(sid:token)` header value
    authorization: String,
}

impl Credentials {
    /// Create credentials, rejecting an empty SID or token
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        let account_sid = account_sid.into();
        let auth_token = auth_token.into();

        if account_sid.is_empty() {
            return Err(Error::missing_field("account_sid"));
        }
        if auth_token.is_empty() {
            return Err(Error::missing_field("auth_token"));
        }

        let encoded = STANDARD.encode(format!("{account_sid}:{auth_token}"));
        Ok(Self {
            account_sid,
            auth_token,
            authorization: format!("Basic {encoded}"),
        })
    }

    /// The account SID
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// The auth token
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> &str {
        &self.authorization
    }

    /// Apply the credentials to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(reqwest::header::AUTHORIZATION, self.authorization.as_str())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
