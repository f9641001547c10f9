//! Phone numbers owned by the account

use super::base::{
    Addressable, Creatable, Fetchable, Listable, Removable, Resource, ToParams, Updatable,
};
use crate::error::{Error, Result};
use crate::types::{rfc2822, Method, ParamsExt, StringMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a number can do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub voice: bool,
    #[serde(rename = "SMS", alias = "sms", default)]
    pub sms: bool,
    #[serde(rename = "MMS", alias = "mms", default)]
    pub mms: bool,
}

/// A provisioned phone number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingPhoneNumber {
    pub sid: String,
    #[serde(default)]
    pub account_sid: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub voice_url: Option<String>,
    #[serde(default)]
    pub voice_method: Option<String>,
    #[serde(default)]
    pub voice_fallback_url: Option<String>,
    #[serde(default)]
    pub voice_fallback_method: Option<String>,
    #[serde(default)]
    pub voice_caller_id_lookup: Option<bool>,
    #[serde(default)]
    pub sms_url: Option<String>,
    #[serde(default)]
    pub sms_method: Option<String>,
    #[serde(default)]
    pub sms_fallback_url: Option<String>,
    #[serde(default)]
    pub sms_fallback_method: Option<String>,
    #[serde(default)]
    pub status_callback: Option<String>,
    #[serde(default)]
    pub status_callback_method: Option<String>,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(with = "rfc2822", default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(with = "rfc2822", default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Resource for IncomingPhoneNumber {
    const LIST_KEY: &'static str = "incoming_phone_numbers";
    const LIST_PATH: &'static str = "/Accounts/{account_sid}/IncomingPhoneNumbers.json";
}

impl Addressable for IncomingPhoneNumber {
    const INSTANCE_PATH: &'static str = "/Accounts/{account_sid}/IncomingPhoneNumbers/{sid}.json";
}

impl Listable for IncomingPhoneNumber {
    type Filter = IncomingPhoneNumberFilter;
}

impl Creatable for IncomingPhoneNumber {
    type Create = NewIncomingPhoneNumber;
    type Created = IncomingPhoneNumber;
}

impl Fetchable for IncomingPhoneNumber {}

impl Updatable for IncomingPhoneNumber {
    type Update = NumberSettings;
}

impl Removable for IncomingPhoneNumber {}

/// Filters for listing owned numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingPhoneNumberFilter {
    pub phone_number: Option<String>,
    pub friendly_name: Option<String>,
}

impl IncomingPhoneNumberFilter {
    /// Match one exact number
    pub fn phone_number(number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(number.into()),
            ..Self::default()
        }
    }
}

impl ToParams for IncomingPhoneNumberFilter {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params
            .set_opt("PhoneNumber", self.phone_number.as_deref())
            .set_opt("FriendlyName", self.friendly_name.as_deref());
        Ok(params)
    }
}

/// Voice and SMS routing of a number, used for updates and provisioning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSettings {
    pub friendly_name: Option<String>,
    pub api_version: Option<String>,
    pub voice_url: Option<String>,
    pub voice_method: Option<Method>,
    pub voice_fallback_url: Option<String>,
    pub voice_fallback_method: Option<Method>,
    pub voice_caller_id_lookup: Option<bool>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<Method>,
    pub sms_url: Option<String>,
    pub sms_method: Option<Method>,
    pub sms_fallback_url: Option<String>,
    pub sms_fallback_method: Option<Method>,
}

impl NumberSettings {
    /// Route incoming calls to `url` with a POST
    pub fn voice_webhook(url: impl Into<String>) -> Self {
        Self {
            voice_url: Some(url.into()),
            voice_method: Some(Method::POST),
            ..Self::default()
        }
    }

    /// Route incoming messages to `url` with a POST
    pub fn sms_webhook(url: impl Into<String>) -> Self {
        Self {
            sms_url: Some(url.into()),
            sms_method: Some(Method::POST),
            ..Self::default()
        }
    }

    fn write(&self, params: &mut StringMap) {
        params
            .set_opt("FriendlyName", self.friendly_name.as_deref())
            .set_opt("ApiVersion", self.api_version.as_deref())
            .set_opt("VoiceUrl", self.voice_url.as_deref())
            .set_opt("VoiceMethod", self.voice_method)
            .set_opt("VoiceFallbackUrl", self.voice_fallback_url.as_deref())
            .set_opt("VoiceFallbackMethod", self.voice_fallback_method)
            .set_opt("VoiceCallerIdLookup", self.voice_caller_id_lookup)
            .set_opt("StatusCallback", self.status_callback.as_deref())
            .set_opt("StatusCallbackMethod", self.status_callback_method)
            .set_opt("SmsUrl", self.sms_url.as_deref())
            .set_opt("SmsMethod", self.sms_method)
            .set_opt("SmsFallbackUrl", self.sms_fallback_url.as_deref())
            .set_opt("SmsFallbackMethod", self.sms_fallback_method);
    }
}

impl ToParams for NumberSettings {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        self.write(&mut params);
        Ok(params)
    }
}

/// Request to provision a number, either an exact one or any in an area code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIncomingPhoneNumber {
    pub phone_number: Option<String>,
    pub area_code: Option<String>,
    pub settings: NumberSettings,
}

impl NewIncomingPhoneNumber {
    /// Provision exactly this number
    pub fn phone_number(number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(number.into()),
            ..Self::default()
        }
    }

    /// Provision any available number in this area code
    pub fn area_code(code: impl Into<String>) -> Self {
        Self {
            area_code: Some(code.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: NumberSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl ToParams for NewIncomingPhoneNumber {
    fn to_params(&self) -> Result<StringMap> {
        let blank = |v: &Option<String>| !v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if blank(&self.phone_number) && blank(&self.area_code) {
            return Err(Error::invalid_argument(
                "PhoneNumber or AreaCode is required",
            ));
        }

        let mut params = StringMap::new();
        params
            .set_opt("PhoneNumber", self.phone_number.as_deref())
            .set_opt("AreaCode", self.area_code.as_deref());
        self.settings.write(&mut params);
        Ok(params)
    }
}
