//! Client entry point
//!
//! [`Client`] wires one authenticated HTTP client into the core API and the
//! task-router API and hands out resource lists and contexts.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::resource::{
    Account, AvailablePhoneNumber, IncomingPhoneNumber, Message, NumberKind, OutgoingCallerId,
    Recording, ResourceContext, ResourceList, TaskQueue,
};
use crate::template;
use crate::version::Version;
use std::sync::Arc;

/// Authenticated REST client
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    api: Api,
    taskrouter: TaskRouter,
}

impl Client {
    /// Build a client from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_credentials(config.http_client_config(), config.credentials()?)?;
        Self::with_transport(config, Arc::new(http))
    }

    /// Build a client over an arbitrary transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let api = Api {
            account_sid: config.account_sid.clone(),
            version: Version::new(
                Arc::clone(&transport),
                &config.api.domain,
                config.api.version.as_str(),
            )?,
        };
        let taskrouter = TaskRouter {
            version: Version::new(
                transport,
                &config.taskrouter.domain,
                config.taskrouter.version.as_str(),
            )?,
        };

        Ok(Self {
            config,
            api,
            taskrouter,
        })
    }

    /// The config this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Account-scoped core API
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Task-router API
    pub fn taskrouter(&self) -> &TaskRouter {
        &self.taskrouter
    }
}

/// Resources of the core API, scoped to the client's account
#[derive(Debug, Clone)]
pub struct Api {
    account_sid: String,
    version: Version,
}

impl Api {
    /// The underlying version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// SID of the account all resources are scoped to
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// The account itself
    pub fn account(&self) -> ResourceContext<Account> {
        ResourceContext::new(
            self.version.clone(),
            template::solution([("sid", self.account_sid.as_str())]),
        )
    }

    /// SMS messages
    pub fn messages(&self) -> ResourceList<Message> {
        self.scoped([])
    }

    /// Numbers available for purchase in `country_code` (ISO 3166, e.g. `US`)
    pub fn available_phone_numbers(
        &self,
        country_code: &str,
        kind: NumberKind,
    ) -> ResourceList<AvailablePhoneNumber> {
        self.scoped([
            ("country_code", country_code),
            ("kind", kind.path_segment()),
        ])
    }

    /// Numbers owned by the account
    pub fn incoming_phone_numbers(&self) -> ResourceList<IncomingPhoneNumber> {
        self.scoped([])
    }

    /// Verified outgoing caller IDs
    pub fn outgoing_caller_ids(&self) -> ResourceList<OutgoingCallerId> {
        self.scoped([])
    }

    /// Call recordings
    pub fn recordings(&self) -> ResourceList<Recording> {
        self.scoped([])
    }

    fn scoped<R, const N: usize>(&self, extra: [(&str, &str); N]) -> ResourceList<R>
    where
        R: crate::resource::Resource,
    {
        let mut solution = template::solution(extra);
        solution.insert("account_sid".to_string(), self.account_sid.clone());
        ResourceList::new(self.version.clone(), solution)
    }
}

/// Resources of the task-router API
#[derive(Debug, Clone)]
pub struct TaskRouter {
    version: Version,
}

impl TaskRouter {
    /// The underlying version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Task queues of one workspace
    pub fn task_queues(&self, workspace_sid: &str) -> ResourceList<TaskQueue> {
        ResourceList::new(
            self.version.clone(),
            template::solution([("workspace_sid", workspace_sid)]),
        )
    }
}
