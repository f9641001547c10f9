//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `account` - Show the account
//! - `messages`, `available-numbers`, `incoming-numbers`, `caller-ids`,
//!   `task-queues` - Stream a list to stdout, one record per line
//! - `send-sms` - Send a message
//! - `serve-webhooks` - Start the callback server

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PagingArgs};
pub use runner::{write_records, Runner};
