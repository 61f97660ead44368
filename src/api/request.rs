//! API request parsing
//!
//! Turns a JSON body into the raw string map the validator consumes.

use std::collections::BTreeMap;

use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::schema::{field_names, RawFields};

/// Raw field values extracted from a JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest {
    fields: BTreeMap<String, String>,
}

impl PredictRequest {
    /// Parse a request from a JSON value.
    ///
    /// Every declared field must be present as a key; the first absent
    /// one in canonical order is reported. Extra keys are ignored.
    pub fn from_json(value: &Value) -> ApiResult<Self> {
        let obj = value.as_object().ok_or(ApiError::PayloadRequired)?;

        let mut fields = BTreeMap::new();
        for name in field_names() {
            let raw = obj.get(name).ok_or(ApiError::MissingField(name))?;
            fields.insert(name.to_string(), stringify(raw));
        }

        Ok(Self { fields })
    }

    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|_| ApiError::PayloadRequired)?;
        Self::from_json(&value)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl RawFields for PredictRequest {
    fn raw(&self, name: &str) -> Option<&str> {
        self.fields.raw(name)
    }
}

/// Strings pass through; everything else uses its JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
