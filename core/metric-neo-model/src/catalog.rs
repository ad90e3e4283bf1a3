//! The process-wide entity catalog.
//!
//! One descriptor per entity the backend exposes. Field order follows the
//! backend's declaration order, which is also the order [`Record::to_value`]
//! emits.
//!
//! [`Record::to_value`]: crate::Record::to_value

use crate::descriptor::{EntityDescriptor, FieldDescriptor};

pub static CHRONO_CONFIG: EntityDescriptor = EntityDescriptor {
    entity_type: "ChronoConfig",
    fields: &[
        FieldDescriptor::scalar("enabled"),
        FieldDescriptor::scalar("port"),
        FieldDescriptor::scalar("baudRate"),
        FieldDescriptor::scalar("autoRecord"),
    ],
};

pub static SHOT: EntityDescriptor = EntityDescriptor {
    entity_type: "Shot",
    fields: &[
        FieldDescriptor::scalar("velocityMPS"),
        FieldDescriptor::scalar("energyJoules"),
        FieldDescriptor::scalar("timestamp"),
        FieldDescriptor::scalar("valid"),
    ],
};

pub static PROJECTILE: EntityDescriptor = EntityDescriptor {
    entity_type: "Projectile",
    fields: &[
        FieldDescriptor::scalar("id"),
        FieldDescriptor::scalar("name"),
        FieldDescriptor::scalar("weightGrams"),
        FieldDescriptor::scalar("bc"),
    ],
};

pub static OPTIC: EntityDescriptor = EntityDescriptor {
    entity_type: "Optic",
    fields: &[
        FieldDescriptor::scalar("type"),
        FieldDescriptor::scalar("modelName"),
        FieldDescriptor::scalar("weightG"),
        FieldDescriptor::scalar("minMagnification"),
        FieldDescriptor::scalar("maxMagnification"),
    ],
};

pub static SIGHT: EntityDescriptor = EntityDescriptor {
    entity_type: "Sight",
    fields: &[
        FieldDescriptor::scalar("id"),
        FieldDescriptor::scalar("type"),
        FieldDescriptor::scalar("modelName"),
        FieldDescriptor::scalar("weightG"),
        FieldDescriptor::scalar("minMagnification"),
        FieldDescriptor::scalar("maxMagnification"),
    ],
};

pub static PROFILE: EntityDescriptor = EntityDescriptor {
    entity_type: "Profile",
    fields: &[
        FieldDescriptor::scalar("id"),
        FieldDescriptor::scalar("name"),
        FieldDescriptor::scalar("category"),
        FieldDescriptor::scalar("barrelLengthMM"),
        FieldDescriptor::scalar("triggerWeightG"),
        FieldDescriptor::scalar("sightHeightMM"),
        FieldDescriptor::entity("optic", &OPTIC).optional(),
        FieldDescriptor::scalar("opticID").optional(),
        FieldDescriptor::scalar("twistRateMM").optional(),
        FieldDescriptor::scalar("defaultAmmoID").optional(),
        FieldDescriptor::scalar("totalWeightG"),
    ],
};

pub static SESSION: EntityDescriptor = EntityDescriptor {
    entity_type: "Session",
    fields: &[
        FieldDescriptor::scalar("id"),
        FieldDescriptor::entity("profileSnapshot", &PROFILE),
        FieldDescriptor::entity("projectileSnapshot", &PROJECTILE),
        FieldDescriptor::sequence("shots", &SHOT),
        FieldDescriptor::scalar("temperatureCelsius").optional(),
        FieldDescriptor::scalar("note"),
        FieldDescriptor::scalar("createdAt"),
    ],
};

pub static SESSION_META: EntityDescriptor = EntityDescriptor {
    entity_type: "SessionMeta",
    fields: &[
        FieldDescriptor::scalar("id"),
        FieldDescriptor::scalar("profileName"),
        FieldDescriptor::scalar("projectileName"),
        FieldDescriptor::scalar("shotCount"),
        FieldDescriptor::scalar("validShotCount"),
        FieldDescriptor::scalar("createdAt"),
        FieldDescriptor::scalar("note"),
        FieldDescriptor::scalar("avgVelocityMPS").optional(),
        FieldDescriptor::scalar("avgEnergyJoules").optional(),
    ],
};

pub static CHRONO_POLL_RESULT: EntityDescriptor = EntityDescriptor {
    entity_type: "ChronoPollResult",
    fields: &[
        FieldDescriptor::scalar("recorded"),
        FieldDescriptor::scalar("velocityMPS").optional(),
        FieldDescriptor::entity("session", &SESSION).optional(),
    ],
};

pub static STATISTICS: EntityDescriptor = EntityDescriptor {
    entity_type: "Statistics",
    fields: &[
        FieldDescriptor::scalar("avgVelocityMPS"),
        FieldDescriptor::scalar("standardDeviation"),
        FieldDescriptor::scalar("minVelocityMPS"),
        FieldDescriptor::scalar("maxVelocityMPS"),
        FieldDescriptor::scalar("extremeSpread"),
        FieldDescriptor::scalar("avgEnergyJoules"),
        FieldDescriptor::scalar("validShotCount"),
        FieldDescriptor::scalar("totalShotCount"),
    ],
};

static ALL: [&EntityDescriptor; 10] = [
    &CHRONO_CONFIG,
    &SHOT,
    &PROJECTILE,
    &OPTIC,
    &SIGHT,
    &PROFILE,
    &SESSION,
    &SESSION_META,
    &CHRONO_POLL_RESULT,
    &STATISTICS,
];

/// Every registered descriptor, leaves first.
#[must_use]
pub fn all() -> &'static [&'static EntityDescriptor] {
    &ALL
}

/// Finds a descriptor by its entity type name (case-sensitive).
#[must_use]
pub fn lookup(entity_type: &str) -> Option<&'static EntityDescriptor> {
    ALL.iter().copied().find(|d| d.entity_type == entity_type)
}
