use metric_neo_model::{HydrationPolicy, Hydrator};
use metric_neo_types::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::normalize::{RawPayload, normalize};
use crate::payload::Payload;

/// Message used when a failed outcome arrives without one.
pub const MISSING_ERROR_MESSAGE: &str = "operation failed without an error message";

/// An operation-level failure reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct OperationError(pub String);

/// The uniform result envelope of every backend-exposed operation.
///
/// `T` is the operation's payload shape: an entity, a `Vec` of entities,
/// `bool` or `String`. A successful outcome may still carry no data, or an
/// empty list; only `success` tells success from failure.
///
/// Serializes to `{"data": ..., "error": ..., "success": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    data: Option<T>,
    error: String,
    success: bool,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: String::new(),
            success: true,
        }
    }

    /// A successful outcome without data.
    pub fn ok_empty() -> Self {
        Self {
            data: None,
            error: String::new(),
            success: true,
        }
    }

    /// A failed outcome. An empty message is replaced by
    /// [`MISSING_ERROR_MESSAGE`].
    pub fn fail(message: impl Into<String>) -> Self {
        let mut error = message.into();
        if error.is_empty() {
            error = MISSING_ERROR_MESSAGE.to_owned();
        }
        Self {
            data: None,
            error,
            success: false,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// The payload. Always `None` for a failed outcome.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// The backend's message. Empty for a successful outcome.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Converts into a `Result` so callers can use `?`.
    pub fn into_result(self) -> std::result::Result<Option<T>, OperationError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(OperationError(self.error))
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            data: self.data.map(f),
            error: self.error,
            success: self.success,
        }
    }

    /// Reads the envelope fields of `value` and hydrates `data` with
    /// `hydrate_data` when the outcome succeeded.
    pub(crate) fn read_with<F>(hydrator: &Hydrator, value: &Value, hydrate_data: F) -> Result<Self>
    where
        F: FnOnce(&Value) -> Result<Option<T>>,
    {
        let Value::Object(envelope) = value else {
            return Err(Error::ShapeMismatch {
                entity: "Outcome",
                expected: "mapping",
                found: Error::kind_of(value),
            });
        };

        let success = match envelope.get("success") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(other) => {
                return Err(Error::ShapeMismatch {
                    entity: "Outcome",
                    expected: "boolean",
                    found: Error::kind_of(other),
                });
            }
        };
        let error = match envelope.get("error") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(message)) => message.clone(),
            Some(other) => {
                return Err(Error::ShapeMismatch {
                    entity: "Outcome",
                    expected: "string",
                    found: Error::kind_of(other),
                });
            }
        };
        let data = envelope.get("data").unwrap_or(&Value::Null);
        let strict = hydrator.policy() == HydrationPolicy::Strict;

        if !success {
            if !data.is_null() {
                debug!("ignoring data on a failed outcome");
            }
            if error.is_empty() {
                if strict {
                    return Err(Error::EnvelopeViolation(
                        "failed outcome carries no error message".into(),
                    ));
                }
                warn!("failed outcome carries no error message");
            }
            return Ok(Self::fail(error));
        }

        if !error.is_empty() {
            if strict {
                return Err(Error::EnvelopeViolation(format!(
                    "successful outcome carries an error message: {error}"
                )));
            }
            warn!(error = %error, "successful outcome carries an error message, dropping it");
        }

        Ok(Self {
            data: hydrate_data(data)?,
            error: String::new(),
            success: true,
        })
    }
}

impl<T: Payload> Outcome<T> {
    /// Hydrates an envelope with the default (tolerant) policy.
    pub fn hydrate(value: &Value) -> Result<Self> {
        Self::hydrate_with(&Hydrator::default(), value)
    }

    /// Hydrates an envelope; `data` goes through `T`'s descriptor.
    pub fn hydrate_with(hydrator: &Hydrator, value: &Value) -> Result<Self> {
        Self::read_with(hydrator, value, |data| T::from_data(hydrator, data))
    }

    /// Normalizes a raw transport payload, then hydrates it.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] for malformed text; this cannot be reported inside an
    /// outcome because no envelope was received.
    pub fn from_raw(input: impl Into<RawPayload>) -> Result<Self> {
        Self::from_raw_with(&Hydrator::default(), input)
    }

    pub fn from_raw_with(hydrator: &Hydrator, input: impl Into<RawPayload>) -> Result<Self> {
        Self::hydrate_with(hydrator, &normalize(input)?)
    }
}

impl<T> Outcome<Vec<T>> {
    /// The list payload; empty when the backend sent none.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}
