use crate::model::entity::EntityModel;
use std::fmt;

///
/// FieldModel
/// Runtime attribute metadata used by criteria compilation and load/dump.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Attribute name as used in criteria paths.
    pub name: &'static str,
    /// Scalar column or relationship.
    pub kind: FieldKind,
}

impl FieldModel {
    #[must_use]
    pub const fn scalar(name: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar(kind),
        }
    }

    #[must_use]
    pub const fn relation(name: &'static str, relation: RelationModel) -> Self {
        Self {
            name,
            kind: FieldKind::Relation(relation),
        }
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self.kind, FieldKind::Scalar(_))
    }

    #[must_use]
    pub const fn as_relation(&self) -> Option<&RelationModel> {
        match &self.kind {
            FieldKind::Relation(relation) => Some(relation),
            FieldKind::Scalar(_) => None,
        }
    }
}

///
/// FieldKind
///

#[derive(Debug)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Relation(RelationModel),
}

///
/// ScalarKind
///
/// Minimal type surface needed to check operator applicability.
/// Aligned with `Value` variants.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarKind {
    Bool,
    Int,
    Uint,
    Float,
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Text => "text",
        };
        write!(f, "{label}")
    }
}

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cardinality {
    One,
    Many,
}

///
/// RelationModel
///
/// Relationship to another entity. The join condition is
/// `source.local_key = target.remote_key`:
///
/// - many-to-one: `local_key` is the foreign key on the source
/// - one-to-many: `remote_key` is the foreign key on the target
///
/// The target is reached through a function so that entity models can
/// refer to each other (or to themselves) without cyclic initializers.
///

#[derive(Clone, Copy, Debug)]
pub struct RelationModel {
    pub target: fn() -> &'static EntityModel,
    pub cardinality: Cardinality,
    pub local_key: &'static str,
    pub remote_key: &'static str,
}

impl RelationModel {
    /// Many-to-one relationship held by a foreign key on the source.
    #[must_use]
    pub const fn one(
        target: fn() -> &'static EntityModel,
        local_key: &'static str,
        remote_key: &'static str,
    ) -> Self {
        Self {
            target,
            cardinality: Cardinality::One,
            local_key,
            remote_key,
        }
    }

    /// One-to-many relationship held by a foreign key on the target.
    #[must_use]
    pub const fn many(
        target: fn() -> &'static EntityModel,
        local_key: &'static str,
        remote_key: &'static str,
    ) -> Self {
        Self {
            target,
            cardinality: Cardinality::Many,
            local_key,
            remote_key,
        }
    }

    #[must_use]
    pub fn target(&self) -> &'static EntityModel {
        (self.target)()
    }

    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self.cardinality, Cardinality::Many)
    }
}
