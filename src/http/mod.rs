//! HTTP client module
//!
//! Provides the transport the pagination engine and resources call through.
//!
//! # Features
//!
//! - **Transport trait**: `execute(method, uri, params)` returning the JSON payload
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Basic Auth**: Account SID / auth token on every request

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::Transport;
