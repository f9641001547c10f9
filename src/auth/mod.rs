//! Authentication module
//!
//! The REST API authenticates every request with HTTP Basic credentials
//! built from the account SID and its auth token.

mod credentials;

pub use credentials::Credentials;
