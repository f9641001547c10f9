//! Task-router queues within a workspace

use super::base::{
    require, Addressable, Creatable, Fetchable, Listable, Removable, Resource, ResourceContext,
    ToParams, Updatable,
};
use crate::error::Result;
use crate::types::{JsonValue, ParamsExt, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskQueue {
    pub sid: String,
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub workspace_sid: Option<String>,
    pub friendly_name: String,
    /// Expression selecting the workers eligible for tasks in this queue
    #[serde(default)]
    pub target_workers: Option<String>,
    #[serde(default)]
    pub max_reserved_workers: Option<u32>,
    #[serde(default)]
    pub reservation_activity_sid: Option<String>,
    #[serde(default)]
    pub reservation_activity_name: Option<String>,
    #[serde(default)]
    pub assignment_activity_sid: Option<String>,
    #[serde(default)]
    pub assignment_activity_name: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Resource for TaskQueue {
    const LIST_KEY: &'static str = "task_queues";
    const LIST_PATH: &'static str = "/Workspaces/{workspace_sid}/TaskQueues";
}

impl Addressable for TaskQueue {
    const INSTANCE_PATH: &'static str = "/Workspaces/{workspace_sid}/TaskQueues/{sid}";
}

impl Listable for TaskQueue {
    type Filter = TaskQueueFilter;
}

impl Creatable for TaskQueue {
    type Create = NewTaskQueue;
    type Created = TaskQueue;
}

impl Fetchable for TaskQueue {}

impl Updatable for TaskQueue {
    type Update = TaskQueueUpdate;
}

impl Removable for TaskQueue {}

impl ResourceContext<TaskQueue> {
    /// Statistics of this queue
    pub fn statistics(&self) -> ResourceContext<TaskQueueStatistics> {
        ResourceContext::new(self.version().clone(), self.solution().clone())
    }
}

/// Cumulative and real-time statistics of one queue.
///
/// The shape of both blocks varies with the workspace's configuration, so
/// they are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskQueueStatistics {
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub workspace_sid: Option<String>,
    pub task_queue_sid: String,
    #[serde(default)]
    pub cumulative: JsonValue,
    #[serde(default)]
    pub realtime: JsonValue,
    #[serde(default)]
    pub url: Option<String>,
}

impl Resource for TaskQueueStatistics {
    const LIST_KEY: &'static str = "task_queues_statistics";
    const LIST_PATH: &'static str = "/Workspaces/{workspace_sid}/TaskQueues/Statistics";
}

impl Addressable for TaskQueueStatistics {
    const INSTANCE_PATH: &'static str = "/Workspaces/{workspace_sid}/TaskQueues/{sid}/Statistics";
}

impl Fetchable for TaskQueueStatistics {}

/// Filters for listing task queues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQueueFilter {
    pub friendly_name: Option<String>,
    /// Only queues whose target expression matches these worker attributes
    pub evaluate_worker_attributes: Option<String>,
}

impl ToParams for TaskQueueFilter {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params
            .set_opt("FriendlyName", self.friendly_name.as_deref())
            .set_opt(
                "EvaluateWorkerAttributes",
                self.evaluate_worker_attributes.as_deref(),
            );
        Ok(params)
    }
}

/// A queue to create
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskQueue {
    pub friendly_name: String,
    pub reservation_activity_sid: String,
    pub assignment_activity_sid: String,
    pub target_workers: Option<String>,
    pub max_reserved_workers: Option<u32>,
}

impl NewTaskQueue {
    pub fn new(
        friendly_name: impl Into<String>,
        reservation_activity_sid: impl Into<String>,
        assignment_activity_sid: impl Into<String>,
    ) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            reservation_activity_sid: reservation_activity_sid.into(),
            assignment_activity_sid: assignment_activity_sid.into(),
            ..Self::default()
        }
    }
}

impl ToParams for NewTaskQueue {
    fn to_params(&self) -> Result<StringMap> {
        require("FriendlyName", &self.friendly_name)?;
        require("ReservationActivitySid", &self.reservation_activity_sid)?;
        require("AssignmentActivitySid", &self.assignment_activity_sid)?;

        let mut params = StringMap::new();
        params
            .set("FriendlyName", &self.friendly_name)
            .set("ReservationActivitySid", &self.reservation_activity_sid)
            .set("AssignmentActivitySid", &self.assignment_activity_sid)
            .set_opt("TargetWorkers", self.target_workers.as_deref())
            .set_opt("MaxReservedWorkers", self.max_reserved_workers);
        Ok(params)
    }
}

/// Task queue update parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQueueUpdate {
    pub friendly_name: Option<String>,
    pub target_workers: Option<String>,
    pub reservation_activity_sid: Option<String>,
    pub assignment_activity_sid: Option<String>,
    pub max_reserved_workers: Option<u32>,
}

impl ToParams for TaskQueueUpdate {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params
            .set_opt("FriendlyName", self.friendly_name.as_deref())
            .set_opt("TargetWorkers", self.target_workers.as_deref())
            .set_opt("ReservationActivitySid", self.reservation_activity_sid.as_deref())
            .set_opt("AssignmentActivitySid", self.assignment_activity_sid.as_deref())
            .set_opt("MaxReservedWorkers", self.max_reserved_workers);
        Ok(params)
    }
}
