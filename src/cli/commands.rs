//! CLI commands and argument parsing

use crate::resource::NumberKind;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the Twilio REST API
#[derive(Parser, Debug)]
#[command(name = "twilio-rest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML). Without it credentials come from
    /// TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paging flags shared by every list command
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PagingArgs {
    /// Stop after this many records
    #[arg(long)]
    pub limit: Option<i64>,

    /// Records requested per page
    #[arg(long)]
    pub page_size: Option<i64>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the account the credentials belong to
    Account,

    /// List SMS messages
    Messages {
        /// Only messages sent to this number
        #[arg(long)]
        to: Option<String>,

        /// Only messages sent from this number
        #[arg(long)]
        from: Option<String>,

        /// Only messages sent on this day (YYYY-MM-DD)
        #[arg(long)]
        date_sent: Option<NaiveDate>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Send an SMS message
    SendSms {
        /// Sending number, one of the account's numbers
        #[arg(long)]
        from: String,

        /// Recipient number
        #[arg(long)]
        to: String,

        /// Message text
        #[arg(long)]
        body: String,

        /// URL notified when the message status changes
        #[arg(long)]
        status_callback: Option<String>,
    },

    /// Search numbers available for purchase
    AvailableNumbers {
        /// ISO country code
        #[arg(long, default_value = "US")]
        country: String,

        /// local, toll-free or mobile
        #[arg(long, default_value = "local")]
        kind: NumberKind,

        /// Area code the number must be in
        #[arg(long)]
        area_code: Option<String>,

        /// Pattern the number must match (digits, letters or `*`)
        #[arg(long)]
        contains: Option<String>,

        /// Only SMS-capable numbers
        #[arg(long)]
        sms_enabled: bool,

        /// Only voice-capable numbers
        #[arg(long)]
        voice_enabled: bool,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List numbers owned by the account
    IncomingNumbers {
        /// Only this number
        #[arg(long)]
        phone_number: Option<String>,

        /// Only numbers with this friendly name
        #[arg(long)]
        friendly_name: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List verified outgoing caller IDs
    CallerIds {
        /// Only this number
        #[arg(long)]
        phone_number: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List task queues of a workspace
    TaskQueues {
        /// Workspace SID (WS...)
        #[arg(long)]
        workspace: String,

        /// Only queues with this friendly name
        #[arg(long)]
        friendly_name: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Serve the callback endpoint for incoming calls and messages
    ServeWebhooks {
        /// Port to listen on (defaults to the configured webhook port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Answer calls to this number with a spoken greeting
        #[arg(long)]
        voice: Vec<String>,

        /// Answer messages to this number with a reply
        #[arg(long)]
        sms: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
