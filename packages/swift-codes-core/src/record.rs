//! SWIFT code record model and response projections.

use serde::{Deserialize, Serialize};

use crate::error::SwiftError;

/// Suffix marking a headquarters code.
pub const HEADQUARTER_SUFFIX: &str = "XXX";

/// Length of the institution/location prefix shared by a headquarters and its branches.
pub const PREFIX_LEN: usize = 8;

/// Returns true iff the code is at least [`PREFIX_LEN`] long and ends with the headquarters suffix.
pub fn is_headquarter(code: &str) -> bool {
    code.len() >= PREFIX_LEN && code.ends_with(HEADQUARTER_SUFFIX)
}

/// First [`PREFIX_LEN`] bytes of the code, or `None` when the code is too short.
pub fn code_prefix(code: &str) -> Option<&str> {
    code.get(..PREFIX_LEN)
}

/// Returns true when `candidate` is a branch of the headquarters `hq_code`.
///
/// Codes shorter than the prefix never match, on either side.
pub fn is_branch_of(candidate: &str, hq_code: &str) -> bool {
    match (code_prefix(candidate), code_prefix(hq_code)) {
        (Some(a), Some(b)) => a == b && candidate != hq_code,
        _ => false,
    }
}

/// A bank or branch entry as stored and returned by the API.
///
/// Every field is optional on decode; the registry performs structural
/// validation only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    #[serde(rename = "swiftCode")]
    pub code: String,
}

impl Record {
    /// Builds a record from raw fields, normalizing country fields and deriving the headquarters flag.
    pub fn new(
        code: impl Into<String>,
        bank_name: impl Into<String>,
        address: impl Into<String>,
        country_iso2: &str,
        country_name: &str,
    ) -> Self {
        let code = code.into();
        Self {
            is_headquarter: is_headquarter(&code),
            code,
            bank_name: bank_name.into(),
            address: address.into(),
            country_iso2: country_iso2.to_uppercase(),
            country_name: country_name.to_uppercase(),
        }
    }

    /// Decodes a record from a client payload.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SwiftError> {
        serde_json::from_slice(bytes)
            .map_err(|e| SwiftError::BadRequest(format!("Invalid request body: {}", e)))
    }

    /// Decodes a record from its stored representation.
    pub fn from_stored(bytes: &[u8]) -> Result<Self, SwiftError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encodes the record for storage.
    pub fn to_stored(&self) -> Result<Vec<u8>, SwiftError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Uppercases the country fields in place.
    pub fn normalize(&mut self) {
        self.country_iso2 = self.country_iso2.to_uppercase();
        self.country_name = self.country_name.to_uppercase();
    }

    /// Consumes the record, returning it with uppercased country fields.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// True when the record is flagged as a headquarters and its code is long enough to own branches.
    pub fn owns_branches(&self) -> bool {
        self.is_headquarter && code_prefix(&self.code).is_some()
    }
}

/// Branch entry embedded in a headquarters response; omits the country name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchView {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    #[serde(rename = "swiftCode")]
    pub code: String,
}

impl From<Record> for BranchView {
    fn from(record: Record) -> Self {
        Self {
            address: record.address,
            bank_name: record.bank_name,
            country_iso2: record.country_iso2.to_uppercase(),
            is_headquarter: record.is_headquarter,
            code: record.code,
        }
    }
}

/// Headquarters record together with its branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadquarterResponse {
    #[serde(flatten)]
    pub record: Record,
    pub branches: Vec<BranchView>,
}

/// All records registered for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryGroup {
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
    #[serde(rename = "swiftCodes")]
    pub swift_codes: Vec<Record>,
}
