//! The catalog of backend-exposed operations and their return shapes.
//!
//! Lets a caller that only knows an operation's binding name hydrate its
//! envelope without naming the payload type.

use std::fmt;
use std::str::FromStr;

use metric_neo_model::catalog::{
    CHRONO_CONFIG, CHRONO_POLL_RESULT, PROFILE, PROJECTILE, SESSION, SESSION_META, SIGHT,
    STATISTICS,
};
use metric_neo_model::{EntityDescriptor, Hydrated, Hydrator};
use metric_neo_types::{Error, Result};
use serde::Serialize;
use serde_json::Value;

use crate::outcome::Outcome;
use crate::payload::Payload;

/// What an operation puts in its envelope's `data` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    One(&'static EntityDescriptor),
    Many(&'static EntityDescriptor),
    Flag,
    Text,
}

/// A dynamically hydrated payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// An entity or a sequence of entities, depending on the shape.
    Entity(Hydrated),
    Flag(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

macro_rules! operations {
    ($($variant:ident => $name:literal : $shape:expr),* $(,)?) => {
        /// A backend-exposed operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            /// Every operation, in binding order.
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            /// The binding name the frontend calls.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            /// The declared shape of the envelope's `data`.
            #[must_use]
            pub fn returns(self) -> ReturnShape {
                match self {
                    $(Operation::$variant => $shape,)*
                }
            }
        }
    };
}

operations! {
    SelectDataDirectory => "SelectDataDirectory": ReturnShape::Text,
    CompleteSetup => "CompleteSetup": ReturnShape::Flag,
    ChangeDataDirectory => "ChangeDataDirectory": ReturnShape::Text,
    GetChronoConfig => "GetChronoConfig": ReturnShape::One(&CHRONO_CONFIG),
    UpdateChronoConfig => "UpdateChronoConfig": ReturnShape::One(&CHRONO_CONFIG),
    SessionPollChrono => "SessionPollChrono": ReturnShape::One(&CHRONO_POLL_RESULT),
    ProfileCreateProfile => "ProfileCreateProfile": ReturnShape::One(&PROFILE),
    ProfileLoadProfile => "ProfileLoadProfile": ReturnShape::One(&PROFILE),
    ProfileListProfiles => "ProfileListProfiles": ReturnShape::Many(&PROFILE),
    ProfileUpdateProfile => "ProfileUpdateProfile": ReturnShape::One(&PROFILE),
    ProfileDeleteProfile => "ProfileDeleteProfile": ReturnShape::Flag,
    ProfileSetOptic => "ProfileSetOptic": ReturnShape::One(&PROFILE),
    ProfileRemoveOptic => "ProfileRemoveOptic": ReturnShape::One(&PROFILE),
    ProfileLinkOpticById => "ProfileLinkOpticByID": ReturnShape::One(&PROFILE),
    ProfileSetTwistRate => "ProfileSetTwistRate": ReturnShape::One(&PROFILE),
    ProfileRemoveTwistRate => "ProfileRemoveTwistRate": ReturnShape::One(&PROFILE),
    SightCreateSight => "SightCreateSight": ReturnShape::One(&SIGHT),
    SightLoadSight => "SightLoadSight": ReturnShape::One(&SIGHT),
    SightListSights => "SightListSights": ReturnShape::Many(&SIGHT),
    SightUpdateSight => "SightUpdateSight": ReturnShape::One(&SIGHT),
    SightDeleteSight => "SightDeleteSight": ReturnShape::Flag,
    ProjectileCreateProjectile => "ProjectileCreateProjectile": ReturnShape::One(&PROJECTILE),
    ProjectileLoadProjectile => "ProjectileLoadProjectile": ReturnShape::One(&PROJECTILE),
    ProjectileListProjectiles => "ProjectileListProjectiles": ReturnShape::Many(&PROJECTILE),
    ProjectileDeleteProjectile => "ProjectileDeleteProjectile": ReturnShape::Flag,
    ProjectileUpdateBc => "ProjectileUpdateBC": ReturnShape::One(&PROJECTILE),
    ProjectileUpdateProjectile => "ProjectileUpdateProjectile": ReturnShape::One(&PROJECTILE),
    SessionCreateSession => "SessionCreateSession": ReturnShape::One(&SESSION),
    SessionRecordShot => "SessionRecordShot": ReturnShape::One(&SESSION),
    SessionMarkShotInvalid => "SessionMarkShotInvalid": ReturnShape::One(&SESSION),
    SessionGetStatistics => "SessionGetStatistics": ReturnShape::One(&STATISTICS),
    SessionLoadSession => "SessionLoadSession": ReturnShape::One(&SESSION),
    SessionListSessions => "SessionListSessions": ReturnShape::Many(&SESSION_META),
    SessionDeleteSession => "SessionDeleteSession": ReturnShape::Flag,
    SessionUpdateNote => "SessionUpdateNote": ReturnShape::One(&SESSION),
}

impl Operation {
    /// Looks up an operation by its exact binding name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// Hydrates this operation's envelope according to its return shape.
    pub fn hydrate(self, hydrator: &Hydrator, value: &Value) -> Result<Outcome<Response>> {
        Outcome::read_with(hydrator, value, |data| self.hydrate_data(hydrator, data))
    }

    fn hydrate_data(self, hydrator: &Hydrator, data: &Value) -> Result<Option<Response>> {
        let (descriptor, expect_many) = match self.returns() {
            ReturnShape::Flag => return Ok(bool::from_data(hydrator, data)?.map(Response::Flag)),
            ReturnShape::Text => return Ok(String::from_data(hydrator, data)?.map(Response::Text)),
            ReturnShape::One(d) => (d, false),
            ReturnShape::Many(d) => (d, true),
        };
        match hydrator.hydrate(data, descriptor)? {
            Hydrated::Absent => Ok(None),
            Hydrated::Entity(_) if expect_many => Err(Error::ShapeMismatch {
                entity: descriptor.entity_type,
                expected: "sequence",
                found: "mapping",
            }),
            Hydrated::Sequence(_) if !expect_many => Err(Error::ShapeMismatch {
                entity: descriptor.entity_type,
                expected: "mapping",
                found: "sequence",
            }),
            hydrated => Ok(Some(Response::Entity(hydrated))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}
