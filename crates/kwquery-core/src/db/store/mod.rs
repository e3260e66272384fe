//! Module: store
//! Responsibility: an in-process `Backend` holding rows per entity model and
//! executing select plans with nested-loop inner joins.
//! Does not own: plan construction.

mod eval;


use crate::{
    db::{
        backend::{Backend, StoreError},
        join::Join,
        query::SelectPlan,
    },
    model::entity::EntityModel,
    value::{FieldMap, Value, compare_eq},
};
use eval::{Tuple, eval};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};

///
/// MemoryStore
///
/// Rows are kept per entity name in insertion order. Primary keys are
/// enforced on insert; nothing else is indexed.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<BTreeMap<&'static str, Vec<FieldMap>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows of `model`.
    #[must_use]
    pub fn len(&self, model: &EntityModel) -> usize {
        self.tables.read().get(model.entity_name).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.read().values().all(Vec::is_empty)
    }

    /// Drop every row of `model`.
    pub fn truncate(&self, model: &EntityModel) {
        self.tables.write().remove(model.entity_name);
    }

    pub fn clear(&self) {
        self.tables.write().clear();
    }
}

impl Backend for MemoryStore {
    fn insert(&self, model: &'static EntityModel, row: FieldMap) -> Result<(), StoreError> {
        let key = primary_key(model, &row)?;

        let mut tables = self.tables.write();
        let rows = tables.entry(model.entity_name).or_default();
        if rows
            .iter()
            .any(|existing| primary_key(model, existing).is_ok_and(|k| same_key(&k, &key)))
        {
            return Err(StoreError::DuplicateKey {
                entity: model.entity_name,
                key: render_key(&key),
            });
        }

        tracing::trace!(entity = model.path, key = %render_key(&key), "insert");
        rows.push(row);

        Ok(())
    }

    fn execute(&self, plan: &SelectPlan) -> Result<Vec<FieldMap>, StoreError> {
        let tables = self.tables.read();

        let root_rows = rows_of(&tables, plan.root);
        let mut tuples: Vec<Tuple<'_>> = root_rows
            .iter()
            .enumerate()
            .map(|(index, row)| Tuple::new(index, row))
            .collect();

        for join in plan.joins.iter() {
            tuples = inner_join(&tuples, join, rows_of(&tables, join.target));
        }

        let predicate = plan.predicate();
        let mut seen = BTreeSet::new();
        let rows: Vec<FieldMap> = tuples
            .iter()
            .filter(|tuple| predicate.as_ref().is_none_or(|expr| eval(tuple, expr)))
            .filter(|tuple| seen.insert(tuple.root_index))
            .map(|tuple| root_rows[tuple.root_index].clone())
            .collect();

        tracing::trace!(
            entity = plan.root.path,
            scanned = root_rows.len(),
            matched = rows.len(),
            "select"
        );

        Ok(rows)
    }
}

fn rows_of<'t>(
    tables: &'t BTreeMap<&'static str, Vec<FieldMap>>,
    model: &EntityModel,
) -> &'t [FieldMap] {
    tables
        .get(model.entity_name)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

// Pair every tuple with each target row whose remote key equals the local
// key of the tuple's source slot; tuples with no partner are dropped. Joins
// run in slot order, so each partner lands in `join.slot`.
fn inner_join<'a>(tuples: &[Tuple<'a>], join: &Join, targets: &'a [FieldMap]) -> Vec<Tuple<'a>> {
    let mut out = Vec::new();
    for tuple in tuples {
        let Some(local) = tuple
            .slot(join.source_slot)
            .and_then(|row| row.get(join.relation.local_key))
        else {
            continue;
        };

        for target in targets {
            let matched = target
                .get(join.relation.remote_key)
                .and_then(|remote| compare_eq(local, remote))
                .unwrap_or(false);
            if matched {
                out.push(tuple.extend(target));
            }
        }
    }

    out
}

fn primary_key<'a>(model: &EntityModel, row: &'a FieldMap) -> Result<Vec<&'a Value>, StoreError> {
    model
        .primary_key
        .iter()
        .map(|field| match row.get(*field) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(StoreError::MissingPrimaryKey {
                entity: model.entity_name,
                field: *field,
            }),
        })
        .collect()
}

fn same_key(a: &[&Value], b: &[&Value]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| compare_eq(x, y).unwrap_or(false))
}

fn render_key(key: &[&Value]) -> String {
    let parts: Vec<String> = key.iter().map(ToString::to_string).collect();

    format!("({})", parts.join(", "))
}
