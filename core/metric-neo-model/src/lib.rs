//! Entity model for the metric-neo bridge.
//!
//! Defines how untyped backend payloads become typed entities:
//! - [`EntityDescriptor`]: an entity's wire fields and their [`FieldKind`]
//! - [`catalog`]: one static descriptor per backend-exposed entity
//! - [`Hydrator`]: walks a structural value against a descriptor and
//!   produces a [`Hydrated`] tree of owned [`Record`]s
//! - [`Hydrate`]: ties each typed entity to its descriptor
//!
//! Hydration is pure: it never mutates its input, performs no I/O and takes
//! no locks.

pub mod catalog;
mod descriptor;
mod hydrator;
mod record;

pub use descriptor::{EntityDescriptor, FieldDescriptor, FieldKind};
pub use hydrator::{HydrationPolicy, Hydrator, hydrate};
pub use record::{FieldValue, Hydrated, Record};

use metric_neo_types::{
    ChronoConfig, ChronoPollResult, Optic, Profile, Projectile, Session, SessionMeta, Shot, Sight,
    Statistics,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A typed entity that can be hydrated from a structural value.
///
/// The descriptor decides which keys are read and how deep to recurse;
/// serde only converts the resulting record into the struct.
pub trait Hydrate: DeserializeOwned + Serialize {
    const DESCRIPTOR: &'static EntityDescriptor;
}

macro_rules! impl_hydrate {
    ($($ty:ty => $descriptor:path),* $(,)?) => {
        $(
            impl Hydrate for $ty {
                const DESCRIPTOR: &'static EntityDescriptor = &$descriptor;
            }
        )*
    };
}

impl_hydrate! {
    ChronoConfig => catalog::CHRONO_CONFIG,
    Shot => catalog::SHOT,
    Projectile => catalog::PROJECTILE,
    Optic => catalog::OPTIC,
    Sight => catalog::SIGHT,
    Profile => catalog::PROFILE,
    Session => catalog::SESSION,
    SessionMeta => catalog::SESSION_META,
    ChronoPollResult => catalog::CHRONO_POLL_RESULT,
    Statistics => catalog::STATISTICS,
}
