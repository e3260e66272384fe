use crate::{
    db::{
        backend::Backend,
        expr::{AttributeRef, CompareOp, Expr},
        graph::LoadError,
        query::{QueryError, SelectPlan},
    },
    model::{entity::EntityModel, field::RelationModel},
    value::{FieldMap, Value},
};

/// Build a row of `model` from a nested mapping.
///
/// When the mapping carries every primary-key attribute and a stored row
/// matches, that row is the starting point; provided scalars are laid over
/// it. A single-valued relationship given as a mapping is loaded in turn and
/// its remote key copied into the local foreign key. Multi-valued
/// relationships are loaded for validation only.
///
/// With `hard`, each scalar attribute must appear in the mapping and keys
/// that name no attribute are rejected.
pub fn load<B: Backend + ?Sized>(
    backend: &B,
    model: &'static EntityModel,
    mapping: &FieldMap,
    hard: bool,
) -> Result<FieldMap, QueryError> {
    if hard && let Some(name) = mapping.keys().find(|name| model.field(name).is_none()) {
        return Err(LoadError::UnknownField {
            entity: model.entity_name,
            name: name.clone(),
        }
        .into());
    }

    let mut row = stored(backend, model, mapping)?.unwrap_or_default();

    for field in model.scalars() {
        match mapping.get(field.name) {
            Some(value) => {
                row.insert(field.name.to_string(), value.clone());
            }
            None if hard => {
                return Err(LoadError::MissingKey {
                    entity: model.entity_name,
                    field: field.name,
                }
                .into());
            }
            None => {}
        }
    }

    for (field, relation) in model.relations() {
        let Some(value) = mapping.get(field.name) else {
            continue;
        };
        load_relation(backend, model, field.name, relation, value, hard, &mut row)?;
    }

    Ok(row)
}

fn load_relation<B: Backend + ?Sized>(
    backend: &B,
    model: &'static EntityModel,
    name: &'static str,
    relation: &RelationModel,
    value: &Value,
    hard: bool,
    row: &mut FieldMap,
) -> Result<(), QueryError> {
    let invalid = |expected| LoadError::InvalidRelationValue {
        entity: model.entity_name,
        name,
        expected,
        kind: value.kind_label(),
    };

    match (value, relation.is_many()) {
        (Value::Null, _) => {}
        (Value::Map(child), false) => {
            let loaded = load(backend, relation.target(), child, hard)?;
            if let Some(key) = loaded.get(relation.remote_key) {
                row.insert(relation.local_key.to_string(), key.clone());
            }
        }
        (Value::List(items), true) => {
            for item in items {
                let Value::Map(child) = item else {
                    return Err(invalid("a list of mappings").into());
                };
                load(backend, relation.target(), child, hard)?;
            }
        }
        (_, false) => return Err(invalid("a mapping").into()),
        (_, true) => return Err(invalid("a list of mappings").into()),
    }

    Ok(())
}

// The stored row addressed by the mapping's full primary key, if any.
fn stored<B: Backend + ?Sized>(
    backend: &B,
    model: &'static EntityModel,
    mapping: &FieldMap,
) -> Result<Option<FieldMap>, QueryError> {
    if model.primary_key.is_empty() {
        return Ok(None);
    }

    let mut plan = SelectPlan::new(model);
    for field in model.primary_key {
        match mapping.get(*field) {
            Some(value) if !value.is_null() => plan.push(Expr::compare(
                AttributeRef::new(model, *field),
                CompareOp::Eq,
                value.clone(),
            )),
            _ => return Ok(None),
        }
    }

    Ok(backend.execute(&plan)?.into_iter().next())
}
