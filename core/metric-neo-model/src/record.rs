use metric_neo_types::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::descriptor::EntityDescriptor;

/// Output of one hydration call.
#[derive(Debug, Clone, PartialEq)]
pub enum Hydrated {
    /// The value was null or missing.
    Absent,
    Entity(Record),
    /// Elements in input order, one per input element.
    Sequence(Vec<Hydrated>),
}

impl Hydrated {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn as_entity(&self) -> Option<&Record> {
        match self {
            Self::Entity(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Hydrated]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Re-serializes to structural form. `Absent` becomes `null`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Absent => Value::Null,
            Self::Entity(record) => record.to_value(),
            Self::Sequence(items) => Value::Array(items.iter().map(Self::to_value).collect()),
        }
    }
}

impl Serialize for Hydrated {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// The value held by one declared field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    /// Copied verbatim from the input.
    Scalar(Value),
    /// A nested entity or sequence of entities. Never `Hydrated::Absent`.
    Nested(Hydrated),
}

/// A hydrated entity: one slot per field of its descriptor.
///
/// Records own all of their data. Nothing in a record borrows from, or is
/// shared with, the structural value it was hydrated from.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    descriptor: &'static EntityDescriptor,
    values: Vec<FieldValue>,
}

impl Record {
    /// `values` must line up with `descriptor.fields`.
    pub(crate) fn new(descriptor: &'static EntityDescriptor, values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(descriptor.fields.len(), values.len());
        Self { descriptor, values }
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn entity_type(&self) -> &'static str {
        self.descriptor.entity_type
    }

    /// Value of a declared field. `None` for undeclared fields and for
    /// absent ones.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        let index = self.descriptor.fields.iter().position(|f| f.name == name)?;
        match &self.values[index] {
            FieldValue::Absent => None,
            value => Some(value),
        }
    }

    /// Iterates declared fields with their values, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.descriptor
            .fields
            .iter()
            .map(|f| f.name)
            .zip(self.values.iter())
    }

    #[must_use]
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Extract a raw scalar value.
    #[must_use]
    pub fn get_scalar(&self, name: &str) -> Option<&Value> {
        match self.get(name)? {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Extract a string scalar.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get_scalar(name).and_then(Value::as_str)
    }

    /// Extract a boolean scalar.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get_scalar(name).and_then(Value::as_bool)
    }

    /// Extract a numeric scalar.
    #[must_use]
    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get_scalar(name).and_then(Value::as_f64)
    }

    /// A nested entity field.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Record> {
        match self.get(name)? {
            FieldValue::Nested(nested) => nested.as_entity(),
            _ => None,
        }
    }

    /// A sequence-of-entity field.
    #[must_use]
    pub fn sequence(&self, name: &str) -> Option<&[Hydrated]> {
        match self.get(name)? {
            FieldValue::Nested(nested) => nested.as_sequence(),
            _ => None,
        }
    }

    /// Re-serializes to a mapping holding every present field. Absent fields
    /// are omitted.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.values.len());
        for (name, value) in self.fields() {
            match value {
                FieldValue::Absent => {}
                FieldValue::Scalar(v) => {
                    map.insert(name.to_owned(), v.clone());
                }
                FieldValue::Nested(nested) => {
                    map.insert(name.to_owned(), nested.to_value());
                }
            }
        }
        Value::Object(map)
    }

    /// Converts the record into its typed entity.
    ///
    /// # Errors
    ///
    /// [`Error::AbsentElement`] if any sequence in the tree, at any depth,
    /// holds a null element; [`Error::Materialize`] if the record does not
    /// fit `T`.
    pub fn materialize<T: DeserializeOwned>(&self) -> Result<T> {
        self.reject_absent_elements()?;
        serde_json::from_value(self.to_value()).map_err(|source| Error::Materialize {
            entity: self.entity_type(),
            source,
        })
    }

    fn reject_absent_elements(&self) -> Result<()> {
        for (field, value) in self.descriptor.fields.iter().zip(&self.values) {
            let FieldValue::Nested(nested) = value else {
                continue;
            };
            match nested {
                Hydrated::Absent => {}
                Hydrated::Entity(record) => record.reject_absent_elements()?,
                Hydrated::Sequence(items) => {
                    let entity = field.kind.target().map_or(field.name, |d| d.entity_type);
                    for (index, item) in items.iter().enumerate() {
                        match item {
                            Hydrated::Absent => return Err(Error::AbsentElement { entity, index }),
                            Hydrated::Entity(record) => record.reject_absent_elements()?,
                            Hydrated::Sequence(_) => {}
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
