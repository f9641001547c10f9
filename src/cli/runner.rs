//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PagingArgs};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::{ListOptions, RecordStream};
use crate::resource::{
    AvailablePhoneNumberFilter, CallerIdFilter, IncomingPhoneNumberFilter, MessageFilter,
    NewMessage, TaskQueueFilter,
};
use crate::webhook::{CallbackParams, CallbackServer};
use futures::TryStreamExt;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

const GREETING: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<Response><Say>Hello from twilio-rest</Say></Response>";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Account => {
                let client = self.client(None)?;
                let account = client.api().account().fetch().await?;
                self.output(&account)?;
                Ok(())
            }
            Commands::Messages {
                to,
                from,
                date_sent,
                paging,
            } => {
                let filter = MessageFilter {
                    to: to.clone(),
                    from: from.clone(),
                    date_sent: *date_sent,
                    ..MessageFilter::default()
                };
                let client = self.client(None)?;
                let stream = client
                    .api()
                    .messages()
                    .stream(&filter, &Self::list_options(*paging))
                    .await?;
                self.drain("messages", stream).await
            }
            Commands::SendSms {
                from,
                to,
                body,
                status_callback,
            } => {
                let mut message = NewMessage::new(from.as_str(), to.as_str(), body.as_str());
                if let Some(url) = status_callback {
                    message = message.status_callback(url.as_str());
                }
                let client = self.client(None)?;
                let sent = client.api().messages().create(&message).await?;
                info!("Queued message {} to {}", sent.sid, sent.to);
                self.output(&sent)?;
                Ok(())
            }
            Commands::AvailableNumbers {
                country,
                kind,
                area_code,
                contains,
                sms_enabled,
                voice_enabled,
                paging,
            } => {
                let filter = AvailablePhoneNumberFilter {
                    area_code: area_code.clone(),
                    contains: contains.clone(),
                    sms_enabled: sms_enabled.then_some(true),
                    voice_enabled: voice_enabled.then_some(true),
                    ..AvailablePhoneNumberFilter::default()
                };
                let client = self.client(None)?;
                let stream = client
                    .api()
                    .available_phone_numbers(country, *kind)
                    .stream(&filter, &Self::list_options(*paging))
                    .await?;
                self.drain("available numbers", stream).await
            }
            Commands::IncomingNumbers {
                phone_number,
                friendly_name,
                paging,
            } => {
                let filter = IncomingPhoneNumberFilter {
                    phone_number: phone_number.clone(),
                    friendly_name: friendly_name.clone(),
                };
                let client = self.client(None)?;
                let stream = client
                    .api()
                    .incoming_phone_numbers()
                    .stream(&filter, &Self::list_options(*paging))
                    .await?;
                self.drain("incoming numbers", stream).await
            }
            Commands::CallerIds {
                phone_number,
                paging,
            } => {
                let filter = CallerIdFilter {
                    phone_number: phone_number.clone(),
                    ..CallerIdFilter::default()
                };
                let client = self.client(None)?;
                let stream = client
                    .api()
                    .outgoing_caller_ids()
                    .stream(&filter, &Self::list_options(*paging))
                    .await?;
                self.drain("caller ids", stream).await
            }
            Commands::TaskQueues {
                workspace,
                friendly_name,
                paging,
            } => {
                let filter = TaskQueueFilter {
                    friendly_name: friendly_name.clone(),
                    ..TaskQueueFilter::default()
                };
                let client = self.client(None)?;
                let stream = client
                    .taskrouter()
                    .task_queues(workspace)
                    .stream(&filter, &Self::list_options(*paging))
                    .await?;
                self.drain("task queues", stream).await
            }
            Commands::ServeWebhooks { port, voice, sms } => {
                self.serve_webhooks(*port, voice, sms).await
            }
        }
    }

    /// Load the config file, or the environment without one
    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                ClientConfig::from_file(path)
            }
            None => ClientConfig::from_env(),
        }
    }

    fn client(&self, port: Option<u16>) -> Result<Client> {
        let mut config = self.load_config()?;
        if let Some(port) = port {
            config.webhook.port = port;
        }
        Client::new(config)
    }

    fn list_options(paging: PagingArgs) -> ListOptions {
        ListOptions {
            limit: paging.limit,
            page_size: paging.page_size,
        }
    }

    /// Print records as they arrive
    async fn drain<T>(&self, what: &str, stream: RecordStream<T>) -> Result<()>
    where
        T: Serialize + Clone + Send + Sync + 'static,
    {
        let start = Instant::now();
        let printed = write_records(stream, self.cli.format, &mut std::io::stdout()).await?;
        info!("Printed {} {} in {:?}", printed, what, start.elapsed());
        Ok(())
    }

    async fn serve_webhooks(&self, port: Option<u16>, voice: &[String], sms: &[String]) -> Result<()> {
        let server = CallbackServer::new(self.client(port)?);

        for number in voice {
            server
                .register_incoming_call(number, |_params: CallbackParams| async move {
                    Ok::<_, anyhow::Error>(GREETING.to_string())
                })
                .await?;
        }
        for number in sms {
            server
                .register_incoming_sms(number, |params: CallbackParams| async move {
                    let from = params.get("From").map_or("there", String::as_str);
                    Ok::<_, anyhow::Error>(format!(
                        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<Response><Message>Hello {from}</Message></Response>"
                    ))
                })
                .await?;
        }

        info!(
            "Handling callbacks for {} numbers",
            server.handler_count().await
        );
        server.serve().await
    }

    fn output<T: Serialize>(&self, record: &T) -> Result<()> {
        write_record(record, self.cli.format, &mut std::io::stdout().lock())
    }
}

/// Write the records of `stream` to `out`, one per line, stopping at the
/// stream's record limit even when the last page holds more.
///
/// Returns the number of records written.
pub async fn write_records<T, W>(
    mut stream: RecordStream<T>,
    format: OutputFormat,
    out: &mut W,
) -> Result<u64>
where
    T: Serialize + Clone + Send + Sync + 'static,
    W: Write,
{
    let limit = stream.limit();
    let mut written = 0;

    while !limit.is_some_and(|limit| written >= limit) {
        let Some(record) = stream.try_next().await? else {
            break;
        };
        write_record(&record, format, out)?;
        written += 1;
    }

    debug!(
        "Wrote {} records from {} pages ({:?})",
        written,
        stream.pages_fetched(),
        stream.stop_reason()
    );
    Ok(written)
}

fn write_record<T: Serialize, W: Write>(record: &T, format: OutputFormat, out: &mut W) -> Result<()> {
    let line = match format {
        OutputFormat::Json => serde_json::to_string(record)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(record)?,
    };
    writeln!(out, "{line}")?;
    Ok(())
}
