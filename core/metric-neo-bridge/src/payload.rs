use metric_neo_model::{Hydrate, Hydrator};
use metric_neo_types::{
    ChronoConfig, ChronoPollResult, Error, Optic, Profile, Projectile, Result, Session,
    SessionMeta, Shot, Sight, Statistics,
};
use serde_json::Value;

/// A shape that can appear in the `data` field of an [`Outcome`].
///
/// Implemented for every entity, for `Vec` of any entity, and for the two
/// scalar payloads the backend returns (`bool` for deletions and setup,
/// `String` for directory selection).
///
/// [`Outcome`]: crate::Outcome
pub trait Payload: Sized {
    /// Hydrates the `data` value. `None` when it is null or missing.
    fn from_data(hydrator: &Hydrator, data: &Value) -> Result<Option<Self>>;
}

impl<T: Hydrate> Payload for Vec<T> {
    fn from_data(hydrator: &Hydrator, data: &Value) -> Result<Option<Self>> {
        hydrator.hydrate_many(data)
    }
}

impl Payload for bool {
    fn from_data(_: &Hydrator, data: &Value) -> Result<Option<Self>> {
        match data {
            Value::Null => Ok(None),
            Value::Bool(flag) => Ok(Some(*flag)),
            other => Err(Error::ShapeMismatch {
                entity: "bool",
                expected: "boolean",
                found: Error::kind_of(other),
            }),
        }
    }
}

impl Payload for String {
    fn from_data(_: &Hydrator, data: &Value) -> Result<Option<Self>> {
        match data {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text.clone())),
            other => Err(Error::ShapeMismatch {
                entity: "string",
                expected: "string",
                found: Error::kind_of(other),
            }),
        }
    }
}

macro_rules! entity_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Payload for $ty {
                fn from_data(hydrator: &Hydrator, data: &Value) -> Result<Option<Self>> {
                    hydrator.hydrate_as(data)
                }
            }
        )*
    };
}

entity_payload!(
    ChronoConfig,
    Shot,
    Projectile,
    Optic,
    Sight,
    Profile,
    Session,
    SessionMeta,
    ChronoPollResult,
    Statistics,
);
