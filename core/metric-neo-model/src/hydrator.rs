use metric_neo_types::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::descriptor::{EntityDescriptor, FieldDescriptor, FieldKind};
use crate::record::{FieldValue, Hydrated, Record};
use crate::Hydrate;

/// How the hydrator treats a required field that is missing or null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationPolicy {
    /// Leave the field absent; typed materialization fills in the default.
    #[default]
    Tolerant,
    /// Fail with [`Error::MissingField`].
    Strict,
}

/// Walks structural values against entity descriptors.
///
/// Stateless apart from its policy; a single hydrator can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hydrator {
    policy: HydrationPolicy,
}

impl Hydrator {
    #[must_use]
    pub const fn new(policy: HydrationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn tolerant() -> Self {
        Self::new(HydrationPolicy::Tolerant)
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new(HydrationPolicy::Strict)
    }

    #[must_use]
    pub const fn policy(&self) -> HydrationPolicy {
        self.policy
    }

    /// Hydrates `value` against `descriptor`.
    ///
    /// Null yields [`Hydrated::Absent`], an array yields a sequence of the
    /// same length and order, and a mapping yields a fresh [`Record`]. Any
    /// other value is a shape mismatch.
    pub fn hydrate(&self, value: &Value, descriptor: &'static EntityDescriptor) -> Result<Hydrated> {
        match value {
            Value::Null => Ok(Hydrated::Absent),
            Value::Array(items) => items
                .iter()
                .map(|item| self.hydrate(item, descriptor))
                .collect::<Result<Vec<_>>>()
                .map(Hydrated::Sequence),
            Value::Object(map) => {
                let values = descriptor
                    .fields
                    .iter()
                    .map(|field| self.hydrate_field(descriptor, field, map.get(field.name)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Hydrated::Entity(Record::new(descriptor, values)))
            }
            other => Err(Error::ShapeMismatch {
                entity: descriptor.entity_type,
                expected: "mapping or sequence",
                found: Error::kind_of(other),
            }),
        }
    }

    fn hydrate_field(
        &self,
        owner: &'static EntityDescriptor,
        field: &'static FieldDescriptor,
        raw: Option<&Value>,
    ) -> Result<FieldValue> {
        // A missing key and an explicit null mean the same thing.
        let Some(raw) = raw.filter(|v| !v.is_null()) else {
            return self.absent_field(owner, field);
        };

        match field.kind {
            FieldKind::Scalar => Ok(FieldValue::Scalar(raw.clone())),
            FieldKind::Entity(nested) => {
                if raw.is_array() {
                    return Err(Error::ShapeMismatch {
                        entity: nested.entity_type,
                        expected: "mapping",
                        found: "sequence",
                    });
                }
                trace!(entity = owner.entity_type, field = field.name, "descending into entity");
                self.hydrate(raw, nested).map(FieldValue::Nested)
            }
            FieldKind::Sequence(nested) => {
                if !raw.is_array() {
                    return Err(Error::ShapeMismatch {
                        entity: nested.entity_type,
                        expected: "sequence",
                        found: Error::kind_of(raw),
                    });
                }
                trace!(entity = owner.entity_type, field = field.name, "descending into sequence");
                self.hydrate(raw, nested).map(FieldValue::Nested)
            }
        }
    }

    fn absent_field(
        &self,
        owner: &'static EntityDescriptor,
        field: &'static FieldDescriptor,
    ) -> Result<FieldValue> {
        if field.optional {
            return Ok(FieldValue::Absent);
        }
        if self.policy == HydrationPolicy::Strict {
            return Err(Error::MissingField {
                entity: owner.entity_type,
                field: field.name,
            });
        }
        debug!(
            entity = owner.entity_type,
            field = field.name,
            "required field absent, leaving default"
        );
        Ok(match field.kind {
            FieldKind::Sequence(_) => FieldValue::Nested(Hydrated::Sequence(Vec::new())),
            FieldKind::Scalar | FieldKind::Entity(_) => FieldValue::Absent,
        })
    }

    /// Hydrates a single typed entity. `None` when the value is null.
    pub fn hydrate_as<T: Hydrate>(&self, value: &Value) -> Result<Option<T>> {
        match self.hydrate(value, T::DESCRIPTOR)? {
            Hydrated::Absent => Ok(None),
            Hydrated::Entity(record) => record.materialize().map(Some),
            Hydrated::Sequence(_) => Err(Error::ShapeMismatch {
                entity: T::DESCRIPTOR.entity_type,
                expected: "mapping",
                found: "sequence",
            }),
        }
    }

    /// Hydrates a sequence of typed entities, preserving order. `None` when
    /// the value is null.
    pub fn hydrate_many<T: Hydrate>(&self, value: &Value) -> Result<Option<Vec<T>>> {
        match self.hydrate(value, T::DESCRIPTOR)? {
            Hydrated::Absent => Ok(None),
            Hydrated::Sequence(items) => materialize_all(&items).map(Some),
            Hydrated::Entity(_) => Err(Error::ShapeMismatch {
                entity: T::DESCRIPTOR.entity_type,
                expected: "sequence",
                found: "mapping",
            }),
        }
    }
}

/// Materializes every element of a hydrated sequence. Absent elements are
/// rejected; a typed vector has no slot for them.
fn materialize_all<T: Hydrate>(items: &[Hydrated]) -> Result<Vec<T>> {
    let descriptor = T::DESCRIPTOR;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Hydrated::Entity(record) => record.materialize(),
            Hydrated::Absent => Err(Error::AbsentElement {
                entity: descriptor.entity_type,
                index,
            }),
            Hydrated::Sequence(_) => Err(Error::ShapeMismatch {
                entity: descriptor.entity_type,
                expected: "mapping",
                found: "sequence",
            }),
        })
        .collect()
}

/// Hydrates with the default (tolerant) policy.
pub fn hydrate(value: &Value, descriptor: &'static EntityDescriptor) -> Result<Hydrated> {
    Hydrator::default().hydrate(value, descriptor)
}
