//! Phone numbers available for purchase in a country

use super::base::{Listable, Resource, ToParams};
use super::incoming_phone_number::Capabilities;
use crate::error::{Error, Result};
use crate::types::{ParamsExt, StringMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A number that can be provisioned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailablePhoneNumber {
    #[serde(default)]
    pub friendly_name: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub lata: Option<String>,
    #[serde(default)]
    pub rate_center: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub iso_country: Option<String>,
    /// `none`, `any`, `local` or `foreign`
    #[serde(default)]
    pub address_requirements: Option<String>,
    #[serde(default)]
    pub beta: Option<bool>,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl Resource for AvailablePhoneNumber {
    const LIST_KEY: &'static str = "available_phone_numbers";
    const LIST_PATH: &'static str =
        "/Accounts/{account_sid}/AvailablePhoneNumbers/{country_code}/{kind}.json";
}

impl Listable for AvailablePhoneNumber {
    type Filter = AvailablePhoneNumberFilter;
}

/// Which pool of numbers to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    #[default]
    Local,
    TollFree,
    Mobile,
}

impl NumberKind {
    /// Path segment naming this pool
    pub fn path_segment(self) -> &'static str {
        match self {
            NumberKind::Local => "Local",
            NumberKind::TollFree => "TollFree",
            NumberKind::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for NumberKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "local" => Ok(NumberKind::Local),
            "tollfree" => Ok(NumberKind::TollFree),
            "mobile" => Ok(NumberKind::Mobile),
            other => Err(Error::invalid_argument(format!(
                "unknown number kind '{other}', expected local, toll-free or mobile"
            ))),
        }
    }
}

/// Search filters for available numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailablePhoneNumberFilter {
    pub area_code: Option<String>,
    /// Digits or letters the number must contain; `*` matches any digit
    pub contains: Option<String>,
    pub sms_enabled: Option<bool>,
    pub mms_enabled: Option<bool>,
    pub voice_enabled: Option<bool>,
    pub exclude_all_address_required: Option<bool>,
    pub exclude_local_address_required: Option<bool>,
    pub exclude_foreign_address_required: Option<bool>,
    pub beta: Option<bool>,
    pub near_number: Option<String>,
    /// `latitude,longitude`
    pub near_lat_long: Option<String>,
    /// Miles from `near_number` / `near_lat_long`
    pub distance: Option<u32>,
    pub in_postal_code: Option<String>,
    pub in_region: Option<String>,
    pub in_rate_center: Option<String>,
    pub in_lata: Option<String>,
}

impl ToParams for AvailablePhoneNumberFilter {
    fn to_params(&self) -> Result<StringMap> {
        let mut params = StringMap::new();
        params
            .set_opt("AreaCode", self.area_code.as_deref())
            .set_opt("Contains", self.contains.as_deref())
            .set_opt("SmsEnabled", self.sms_enabled)
            .set_opt("MmsEnabled", self.mms_enabled)
            .set_opt("VoiceEnabled", self.voice_enabled)
            .set_opt("ExcludeAllAddressRequired", self.exclude_all_address_required)
            .set_opt("ExcludeLocalAddressRequired", self.exclude_local_address_required)
            .set_opt("ExcludeForeignAddressRequired", self.exclude_foreign_address_required)
            .set_opt("Beta", self.beta)
            .set_opt("NearNumber", self.near_number.as_deref())
            .set_opt("NearLatLong", self.near_lat_long.as_deref())
            .set_opt("Distance", self.distance)
            .set_opt("InPostalCode", self.in_postal_code.as_deref())
            .set_opt("InRegion", self.in_region.as_deref())
            .set_opt("InRateCenter", self.in_rate_center.as_deref())
            .set_opt("InLata", self.in_lata.as_deref());
        Ok(params)
    }
}
