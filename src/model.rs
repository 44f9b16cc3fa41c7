use serde::{Deserialize, Serialize};

/// Address fragments submitted to the service for lookup.
///
/// Nothing here is validated locally: a filter missing both `city` and
/// `zip_code_leading5`, or carrying an oversized `state_code`, is sent as-is
/// and the service decides what to make of it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code_leading5: Option<String>,
}

impl AddressFilter {
    pub fn new(line1: impl Into<String>) -> Self {
        Self {
            line1: Some(line1.into()),
            ..Default::default()
        }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state_code(mut self, state_code: impl Into<String>) -> Self {
        self.state_code = Some(state_code.into());
        self
    }

    pub fn zip_code_leading5(mut self, zip: impl Into<String>) -> Self {
        self.zip_code_leading5 = Some(zip.into());
        self
    }
}

/// Response of a lookup
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResult {
    pub count: u32,
    #[serde(default)]
    pub addresses: Vec<AddressMatch>,
}

impl AddressResult {
    /// whether `count` agrees with the number of returned addresses
    pub fn is_consistent(&self) -> bool {
        self.count as usize == self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn first(&self) -> Option<&AddressMatch> {
        self.addresses.first()
    }
}

/// A canonicalized address returned by the service
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressMatch {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub zip_code_leading5: String,
}

impl From<AddressMatch> for AddressFilter {
    fn from(address: AddressMatch) -> Self {
        Self {
            line1: Some(address.line1),
            city: Some(address.city),
            state_code: Some(address.state_code),
            zip_code_leading5: Some(address.zip_code_leading5),
        }
    }
}

impl From<&AddressMatch> for AddressFilter {
    fn from(address: &AddressMatch) -> Self {
        address.clone().into()
    }
}
