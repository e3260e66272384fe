use crate::model::field::{FieldKind, FieldModel, RelationModel, ScalarKind};

///
/// EntityModel
/// Minimal runtime model for one entity.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name; also the entity's identity in join sets.
    pub entity_name: &'static str,
    /// Table name used when rendering plans.
    pub table: &'static str,
    /// Primary-key attribute set (each entry names a scalar in `fields`).
    pub primary_key: &'static [&'static str],
    /// Ordered attribute directory.
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    #[must_use]
    pub const fn new(
        path: &'static str,
        entity_name: &'static str,
        table: &'static str,
        primary_key: &'static [&'static str],
        fields: &'static [FieldModel],
    ) -> Self {
        Self {
            path,
            entity_name,
            table,
            primary_key,
            fields,
        }
    }

    /// Look up any attribute by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Look up a scalar attribute by name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<(&'static FieldModel, ScalarKind)> {
        self.field(name).and_then(|field| match field.kind {
            FieldKind::Scalar(kind) => Some((field, kind)),
            FieldKind::Relation(_) => None,
        })
    }

    /// Look up a relationship attribute by name.
    #[must_use]
    pub fn relation(&self, name: &str) -> Option<(&'static FieldModel, &'static RelationModel)> {
        self.field(name)
            .and_then(|field| field.as_relation().map(|relation| (field, relation)))
    }

    pub fn scalars(&self) -> impl Iterator<Item = &'static FieldModel> {
        self.fields.iter().filter(|field| field.is_scalar())
    }

    pub fn relations(&self) -> impl Iterator<Item = (&'static FieldModel, &'static RelationModel)> {
        self.fields
            .iter()
            .filter_map(|field| field.as_relation().map(|relation| (field, relation)))
    }

    /// Entity identity: two models are the same type when their names match.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.entity_name == other.entity_name
    }
}
