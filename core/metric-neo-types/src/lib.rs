//! Core type definitions for the metric-neo bridge.
//!
//! This crate defines the typed entities the backend core exchanges with the
//! presentation layer, together with the error type shared by every stage of
//! the hydration pipeline:
//! - Equipment and configuration: [`ChronoConfig`], [`Optic`], [`Sight`],
//!   [`Projectile`], [`Profile`]
//! - Recordings: [`Shot`], [`Session`], [`SessionMeta`], [`ChronoPollResult`]
//! - Aggregates: [`Statistics`]
//!
//! The structs carry no behaviour beyond serde. Field names on the wire are
//! camelCase and fixed by the backend.

mod entities;

pub use entities::{
    ChronoConfig, ChronoPollResult, Optic, Profile, Projectile, Session, SessionMeta, Shot, Sight,
    Statistics,
};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while normalizing or hydrating a payload.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{entity}: expected {expected}, found {found}")]
    ShapeMismatch {
        entity: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{entity}: required field `{field}` is missing")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: sequence element {index} is absent")]
    AbsentElement { entity: &'static str, index: usize },

    #[error("{entity}: hydrated record does not fit the entity: {source}")]
    Materialize {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("envelope violation: {0}")]
    EnvelopeViolation(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Short name of a structural value's kind, used in shape errors.
    #[must_use]
    pub fn kind_of(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "sequence",
            serde_json::Value::Object(_) => "mapping",
        }
    }
}
