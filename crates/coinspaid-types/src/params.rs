//! Request parameters and the canonical payload
//!
//! The service verifies signatures against the exact JSON bytes of the
//! request body, so parameters keep the order they were added in and the
//! same string is both signed and sent.

use crate::endpoint::Endpoint;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Payload sent for a request without parameters.
///
/// The service rejects signatures computed over `{}`; an empty request must
/// be signed and sent as an empty JSON array.
pub const EMPTY_PAYLOAD: &str = "[]";

/// Insertion-ordered request parameters
///
/// Keys are the fixed names mandated by the API, values are always strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(&'static str, String)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing the value in place if the key already exists
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Add an optional parameter; `None` and empty strings are omitted
    pub fn insert_opt(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.insert(key, value);
        }
        self
    }

    /// Builder form of [`Params::insert`]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`Params::insert_opt`]
    pub fn with_opt(mut self, key: &'static str, value: Option<&str>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no parameters were added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Render the canonical payload: `[]` when empty, otherwise a JSON
    /// object with keys in insertion order
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        if self.entries.is_empty() {
            return Ok(EMPTY_PAYLOAD.to_string());
        }
        serde_json::to_string(self)
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A single API call: where it goes and what it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Ordered parameters
    pub params: Params,
}

impl Request {
    /// Create a request without parameters
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Params::new(),
        }
    }

    /// Create a request with parameters
    pub fn with_params(endpoint: Endpoint, params: Params) -> Self {
        Self { endpoint, params }
    }
}
