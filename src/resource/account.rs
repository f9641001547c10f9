//! The account the client authenticates as

use super::base::{Addressable, Fetchable, Resource, ToParams, Updatable};
use crate::error::Result;
use crate::types::{rfc2822, ParamsExt, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub sid: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub owner_account_sid: Option<String>,
    #[serde(with = "rfc2822", default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(with = "rfc2822", default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Resource for Account {
    const LIST_KEY: &'static str = "accounts";
    const LIST_PATH: &'static str = "/Accounts.json";
}

impl Addressable for Account {
    const INSTANCE_PATH: &'static str = "/Accounts/{sid}.json";
}

impl Fetchable for Account {}

impl Updatable for Account {
    type Update = AccountUpdate;
}

/// Account update parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub friendly_name: Option<String>,
    /// `active`, `suspended` or `closed`
    pub status: Option<String>,
}

impl AccountUpdate {
    /// Rename the account
    pub fn friendly_name(name: impl Into<String>) -> Self {
        Self {
            friendly_name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl ToParams for AccountUpdate {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params
            .set_opt("FriendlyName", self.friendly_name.as_deref())
            .set_opt("Status", self.status.as_deref());
        Ok(params)
    }
}
