//! Error map decoded from unsuccessful responses
//!
//! The service reports failures as `{"errors": {field: message}}`; older
//! deployments answer with a bare `{field: message}` object. Messages may be
//! a single string or a list of strings.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field to message map describing why a request failed
///
/// Never empty once built through [`ErrorMap::from_body`] or
/// [`ErrorMap::message`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<String, String>);

/// Key used when the body could not be decoded into fields
pub const MESSAGE_KEY: &str = "message";

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessages {
    fn into_message(self) -> String {
        match self {
            Self::One(message) => message,
            Self::Many(messages) => messages.join(", "),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: BTreeMap<String, ErrorMessages>,
}

impl ErrorMap {
    /// Decode an error response body
    ///
    /// Falls back to a single `message` entry holding the raw body when the
    /// body is neither shape or carries no fields.
    pub fn from_body(body: &str) -> Self {
        let fields = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.errors)
            .or_else(|_| serde_json::from_str::<BTreeMap<String, ErrorMessages>>(body));

        match fields {
            Ok(fields) if !fields.is_empty() => Self(
                fields
                    .into_iter()
                    .map(|(field, messages)| (field, messages.into_message()))
                    .collect(),
            ),
            _ => Self::message(body),
        }
    }

    /// Single-entry map keyed `message`
    pub fn message(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(MESSAGE_KEY.to_string(), text.into());
        Self(map)
    }

    /// Message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Check whether a field has an error
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, message)` pairs, sorted by field
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Take the underlying map
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}
