//! Webhook module
//!
//! Receives the callbacks the API makes when a provisioned number gets a
//! call or a message. Registering a handler for a number rewrites that
//! number's voice or SMS URL to point at this server.

mod server;

pub use server::{CallbackHandler, CallbackParams, CallbackServer};
