//! Turns whatever the transport delivered into a structural value.

use metric_neo_types::Result;
use serde_json::{Map, Value};
use tracing::trace;

/// A payload as delivered by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// Nothing was delivered.
    Absent,
    /// JSON text, not yet parsed.
    Text(String),
    /// An already-parsed value, passed through untouched.
    Structural(Value),
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self::Structural(value)
    }
}

impl<T: Into<RawPayload>> From<Option<T>> for RawPayload {
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Absent, Into::into)
    }
}

/// Normalizes a raw payload into a structural value.
///
/// Text is parsed as JSON; blank text and [`RawPayload::Absent`] become an
/// empty mapping so that optional-field hydration degrades to absence.
/// Structural input, `null` included, is returned unchanged.
///
/// # Errors
///
/// [`Error::Parse`](metric_neo_types::Error::Parse) if the text is not
/// well-formed JSON.
pub fn normalize(input: impl Into<RawPayload>) -> Result<Value> {
    match input.into() {
        RawPayload::Absent => Ok(empty_mapping()),
        RawPayload::Text(text) if text.trim().is_empty() => Ok(empty_mapping()),
        RawPayload::Text(text) => {
            trace!(bytes = text.len(), "parsing payload text");
            Ok(serde_json::from_str(&text)?)
        }
        RawPayload::Structural(value) => Ok(value),
    }
}

fn empty_mapping() -> Value {
    Value::Object(Map::new())
}
