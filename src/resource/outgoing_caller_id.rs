//! Verified numbers the account may present as caller ID

use super::base::{
    require, Addressable, Creatable, Fetchable, Listable, Removable, Resource, ToParams, Updatable,
};
use crate::error::{Error, Result};
use crate::types::{rfc2822, JsonValue, ParamsExt, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Longest delay, in seconds, before the verification call is placed
pub const MAX_CALL_DELAY: u32 = 60;

/// A verified caller ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingCallerId {
    pub sid: String,
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    pub phone_number: String,
    #[serde(with = "rfc2822", default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(with = "rfc2822", default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Resource for OutgoingCallerId {
    const LIST_KEY: &'static str = "outgoing_caller_ids";
    const LIST_PATH: &'static str = "/Accounts/{account_sid}/OutgoingCallerIds.json";
}

impl Addressable for OutgoingCallerId {
    const INSTANCE_PATH: &'static str = "/Accounts/{account_sid}/OutgoingCallerIds/{sid}.json";
}

impl Listable for OutgoingCallerId {
    type Filter = CallerIdFilter;
}

impl Creatable for OutgoingCallerId {
    type Create = NewCallerId;
    type Created = ValidationRequest;
}

impl Fetchable for OutgoingCallerId {}

impl Updatable for OutgoingCallerId {
    type Update = CallerIdUpdate;
}

impl Removable for OutgoingCallerId {}

/// Filters for listing caller IDs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdFilter {
    pub phone_number: Option<String>,
    pub friendly_name: Option<String>,
}

impl ToParams for CallerIdFilter {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params
            .set_opt("PhoneNumber", self.phone_number.as_deref())
            .set_opt("FriendlyName", self.friendly_name.as_deref());
        Ok(params)
    }
}

/// Caller ID update parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdUpdate {
    pub friendly_name: Option<String>,
}

impl ToParams for CallerIdUpdate {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params.set_opt("FriendlyName", self.friendly_name.as_deref());
        Ok(params)
    }
}

/// Request to verify a new caller ID. The API answers by calling the number
/// and asking for the returned validation code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCallerId {
    pub phone_number: String,
    pub friendly_name: Option<String>,
    /// Seconds to wait before calling, at most [`MAX_CALL_DELAY`]
    pub call_delay: Option<u32>,
    /// Digits to dial after connecting
    pub extension: Option<String>,
}

impl NewCallerId {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }
}

impl ToParams for NewCallerId {
    fn to_params(&self) -> Result<StringMap> {
        require("PhoneNumber", &self.phone_number)?;
        if let Some(delay) = self.call_delay.filter(|d| *d > MAX_CALL_DELAY) {
            return Err(Error::invalid_argument(format!(
                "CallDelay must be at most {MAX_CALL_DELAY} seconds, got {delay}"
            )));
        }

        let mut params = StringMap::new();
        params
            .set("PhoneNumber", &self.phone_number)
            .set_opt("FriendlyName", self.friendly_name.as_deref())
            .set_opt("CallDelay", self.call_delay)
            .set_opt("Extension", self.extension.as_deref());
        Ok(params)
    }
}

/// Pending verification of a caller ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub account_sid: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    /// Code the callee has to enter
    #[serde(deserialize_with = "code_string")]
    pub validation_code: String,
    #[serde(default)]
    pub call_sid: Option<String>,
}

/// Validation codes arrive as either strings or numbers
fn code_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid validation code: {other}"
        ))),
    }
}
