use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Describes an entity's wire structure for hydration.
///
/// Descriptors are `static` items that reference each other by address, so a
/// descriptor graph can nest to any depth without allocation.
#[derive(Debug, Serialize)]
pub struct EntityDescriptor {
    pub entity_type: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl EntityDescriptor {
    /// Looks up a declared field by its wire key.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire keys of every declared field, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }

    /// Descriptors this one recurses into, in declaration order.
    pub fn children(&self) -> impl Iterator<Item = &'static EntityDescriptor> {
        self.fields.iter().filter_map(|f| f.kind.target())
    }
}

impl PartialEq for EntityDescriptor {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for EntityDescriptor {}

/// A single field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Exact, case-sensitive wire key.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Absence of an optional field is never reported, under any policy.
    pub optional: bool,
}

impl FieldDescriptor {
    /// Shorthand for a required scalar field.
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar,
            optional: false,
        }
    }

    /// Shorthand for a required nested entity.
    pub const fn entity(name: &'static str, descriptor: &'static EntityDescriptor) -> Self {
        Self {
            name,
            kind: FieldKind::Entity(descriptor),
            optional: false,
        }
    }

    /// Shorthand for a required sequence of entities.
    pub const fn sequence(name: &'static str, descriptor: &'static EntityDescriptor) -> Self {
        Self {
            name,
            kind: FieldKind::Sequence(descriptor),
            optional: false,
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// The closed set of field kinds. Nested kinds carry the descriptor to
/// recurse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Entity(&'static EntityDescriptor),
    Sequence(&'static EntityDescriptor),
}

impl FieldKind {
    /// The nested descriptor, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&'static EntityDescriptor> {
        match self {
            Self::Scalar => None,
            Self::Entity(d) | Self::Sequence(d) => Some(*d),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Entity(_) => "entity",
            Self::Sequence(_) => "sequence",
        }
    }
}

/// Nested kinds serialize by name so that a catalog dump stays flat:
/// `{"kind": "entity", "entity_type": "Optic"}`.
impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let target = self.target();
        let mut map = serializer.serialize_map(Some(if target.is_some() { 2 } else { 1 }))?;
        map.serialize_entry("kind", self.as_str())?;
        if let Some(d) = target {
            map.serialize_entry("entity_type", d.entity_type)?;
        }
        map.end()
    }
}
