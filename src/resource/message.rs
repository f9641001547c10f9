//! SMS messages sent and received by the account

use super::base::{require, Addressable, Creatable, Fetchable, Listable, Resource, ToParams};
use crate::error::Result;
use crate::types::{rfc2822, ParamsExt, StringMap};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An SMS message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sid: String,
    #[serde(default)]
    pub account_sid: Option<String>,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub body: Option<String>,
    /// `queued`, `sending`, `sent`, `failed` or `received`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(with = "rfc2822", default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(with = "rfc2822", default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(with = "rfc2822", default)]
    pub date_sent: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Resource for Message {
    const LIST_KEY: &'static str = "sms_messages";
    const LIST_PATH: &'static str = "/Accounts/{account_sid}/SMS/Messages.json";
}

impl Addressable for Message {
    const INSTANCE_PATH: &'static str = "/Accounts/{account_sid}/SMS/Messages/{sid}.json";
}

impl Listable for Message {
    type Filter = MessageFilter;
}

impl Creatable for Message {
    type Create = NewMessage;
    type Created = Message;
}

impl Fetchable for Message {}

/// Filters for listing messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub to: Option<String>,
    pub from: Option<String>,
    /// Only messages sent on this day
    pub date_sent: Option<NaiveDate>,
    /// Only messages sent on or before this day
    pub date_sent_before: Option<NaiveDate>,
    /// Only messages sent on or after this day
    pub date_sent_after: Option<NaiveDate>,
}

impl ToParams for MessageFilter {
    fn to_params(&self) -> Result<StringMap> {
        let day = |d: &NaiveDate| d.format("%Y-%m-%d").to_string();
        let mut params = StringMap::new();
        params
            .set_opt("To", self.to.as_deref())
            .set_opt("From", self.from.as_deref())
            .set_opt("DateSent", self.date_sent.as_ref().map(day))
            .set_opt("DateSent<", self.date_sent_before.as_ref().map(day))
            .set_opt("DateSent>", self.date_sent_after.as_ref().map(day));
        Ok(params)
    }
}

/// A message to send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMessage {
    pub from: String,
    pub to: String,
    pub body: String,
    /// URL notified as the message status changes
    pub status_callback: Option<String>,
}

impl NewMessage {
    pub fn new(from: impl Into<String>, to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            body: body.into(),
            status_callback: None,
        }
    }

    #[must_use]
    pub fn status_callback(mut self, url: impl Into<String>) -> Self {
        self.status_callback = Some(url.into());
        self
    }
}

impl ToParams for NewMessage {
    fn to_params(&self) -> Result<StringMap> {
        require("From", &self.from)?;
        require("To", &self.to)?;
        require("Body", &self.body)?;

        let mut params = StringMap::new();
        params
            .set("From", &self.from)
            .set("To", &self.to)
            .set("Body", &self.body)
            .set_opt("StatusCallback", self.status_callback.as_deref());
        Ok(params)
    }
}
