//! Call recordings

use super::base::{Addressable, Fetchable, Listable, Removable, Resource, ToParams};
use crate::error::Result;
use crate::types::{rfc2822, ParamsExt, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of a recorded call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub sid: String,
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub call_sid: Option<String>,
    /// Length in seconds, as a decimal string
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(with = "rfc2822", default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(with = "rfc2822", default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Resource for Recording {
    const LIST_KEY: &'static str = "recordings";
    const LIST_PATH: &'static str = "/Accounts/{account_sid}/Recordings.json";
}

impl Addressable for Recording {
    const INSTANCE_PATH: &'static str = "/Accounts/{account_sid}/Recordings/{sid}.json";
}

impl Listable for Recording {
    type Filter = RecordingFilter;
}

impl Fetchable for Recording {}

impl Removable for Recording {}

/// Filters for listing recordings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingFilter {
    pub call_sid: Option<String>,
}

impl ToParams for RecordingFilter {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params.set_opt("CallSid", self.call_sid.as_deref());
        Ok(params)
    }
}
