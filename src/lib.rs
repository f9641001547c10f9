//! # twilio-rest
//!
//! Async client for the Twilio REST API. Every list endpoint is exposed as a
//! lazy record stream that fetches pages on demand and stops at a record
//! limit, a page limit or the end of the collection.
//!
//! ## Features
//!
//! - **Lazy pagination**: `stream` yields records one at a time across pages
//! - **Bounded reads**: record limits, page sizes and page limits
//! - **Resources**: accounts, SMS, phone numbers, caller IDs, recordings, task queues
//! - **Transport**: basic auth, retry with backoff, rate limiting
//! - **Webhooks**: route incoming calls and messages to async handlers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use twilio_rest::{Client, ClientConfig, ListOptions, MessageFilter, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::from_env()?)?;
//!
//!     let mut messages = client
//!         .api()
//!         .messages()
//!         .stream(&MessageFilter::default(), &ListOptions::new().limit(100))
//!         .await?;
//!
//!     while let Some(message) = messages.try_next().await? {
//!         println!("{}: {:?}", message.sid, message.body);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ Client → Api / TaskRouter → ResourceList / ResourceContext    │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬────────────┐
//! │   Auth   │   HTTP    │   Version     │ Paginate  │  Webhook   │
//! ├──────────┼───────────┼───────────────┼───────────┼────────────┤
//! │ Basic    │ GET/POST  │ URI prefix    │ Page      │ axum       │
//! │          │ Retry     │ Instance CRUD │ Fetcher   │ Handlers   │
//! │          │ Rate Limit│ Limits        │ Stream    │            │
//! └──────────┴───────────┴───────────────┴───────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Account credentials
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Page decoding and record streaming
pub mod pagination;

/// API version and instance operations
pub mod version;

/// Resource descriptors and handles
pub mod resource;

/// Client entry point
pub mod client;

/// Client configuration
pub mod config;

/// URI template interpolation
pub mod template;

/// Callback server for incoming calls and messages
pub mod webhook;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::{Api, Client, TaskRouter};
pub use config::ClientConfig;
pub use pagination::{collect, ListOptions, Page, PageOptions, RecordStream, StopReason};
pub use resource::{
    Account, AvailablePhoneNumber, IncomingPhoneNumber, Message, MessageFilter, NewMessage,
    NumberKind, OutgoingCallerId, Recording, ResourceContext, ResourceList, TaskQueue,
    TaskQueueStatistics,
};
pub use version::Version;
pub use webhook::CallbackServer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
