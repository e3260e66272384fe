use crate::{
    db::{
        backend::{Backend, StoreError},
        graph::DumpOptions,
    },
    model::entity::EntityModel,
    value::{FieldMap, Value},
};

/// Dump one stored row of `model` as a nested mapping.
///
/// Scalars are copied (absent ones as `Null`). While levels remain,
/// single-valued relationships become a mapping (or `Null` when unset or
/// dangling) and multi-valued ones a list of mappings.
pub fn dump<B: Backend + ?Sized>(
    backend: &B,
    model: &'static EntityModel,
    row: &FieldMap,
    options: &DumpOptions,
) -> Result<FieldMap, StoreError> {
    dump_level(backend, model, row, options, options.depth)
}

fn dump_level<B: Backend + ?Sized>(
    backend: &B,
    model: &'static EntityModel,
    row: &FieldMap,
    options: &DumpOptions,
    depth: usize,
) -> Result<FieldMap, StoreError> {
    let mut out = FieldMap::new();

    for field in model.scalars() {
        if options.is_excluded(field.name) {
            continue;
        }
        let value = row.get(field.name).cloned().unwrap_or_default();
        out.insert(field.name.to_string(), value);
    }

    if depth <= 1 {
        return Ok(out);
    }

    for (field, relation) in model.relations() {
        if options.is_excluded(field.name) {
            continue;
        }

        let related = match row.get(relation.local_key) {
            Some(key) if !key.is_null() => {
                backend.lookup(relation.target(), relation.remote_key, key)?
            }
            _ => Vec::new(),
        };

        let mut nested = related
            .iter()
            .map(|child| dump_level(backend, relation.target(), child, options, depth - 1))
            .collect::<Result<Vec<_>, _>>()?;

        let value = if relation.is_many() {
            Value::List(nested.into_iter().map(Value::Map).collect())
        } else if nested.is_empty() {
            Value::Null
        } else {
            Value::Map(nested.swap_remove(0))
        };
        out.insert(field.name.to_string(), value);
    }

    Ok(out)
}
