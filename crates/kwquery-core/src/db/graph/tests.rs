use super::*;
use crate::{
    db::{
        backend::Backend,
        query::QueryError,
        store::MemoryStore,
    },
    serialize::to_field_map,
    test_fixtures::{CATEGORY_MODEL, Category, STATUS_MODEL, Status, TREATMENT_MODEL, Treatment},
    traits::EntityKind,
    value::{FieldMap, Value},
};

fn row<E: EntityKind>(entity: &E) -> FieldMap {
    to_field_map(E::MODEL.entity_name, entity).unwrap()
}

fn map(pairs: &[(&str, Value)]) -> FieldMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn seeded() -> MemoryStore {
    let store = MemoryStore::new();
    let category = Category {
        id: 7,
        label: "main".into(),
    };
    store.insert(&CATEGORY_MODEL, row(&category)).unwrap();
    store
        .insert(&STATUS_MODEL, row(&Status::new(1, "ok", Some(7))))
        .unwrap();
    store
        .insert(&STATUS_MODEL, row(&Status::new(2, "ko", None)))
        .unwrap();
    store
        .insert(&TREATMENT_MODEL, row(&Treatment::new(1, "test 0", 1)))
        .unwrap();
    store
        .insert(&TREATMENT_MODEL, row(&Treatment::new(2, "test 1", 1)))
        .unwrap();

    store
}

#[test]
fn default_depth_follows_one_level_of_relationships() {
    let store = seeded();
    let out = dump(
        &store,
        &TREATMENT_MODEL,
        &row(&Treatment::new(1, "test 0", 1)),
        &DumpOptions::default(),
    )
    .unwrap();

    let status = map(&[
        ("id", Value::Int(1)),
        ("name", text("ok")),
        ("category_id", Value::Int(7)),
    ]);
    assert_eq!(
        out,
        map(&[
            ("id", Value::Int(1)),
            ("name", text("test 0")),
            ("status_id", Value::Int(1)),
            ("status", Value::Map(status)),
        ])
    );
}

#[test]
fn depth_one_dumps_scalars_only() {
    let store = seeded();
    let out = dump(
        &store,
        &TREATMENT_MODEL,
        &row(&Treatment::new(1, "test 0", 1)),
        &DumpOptions::new().depth(1),
    )
    .unwrap();

    assert_eq!(out.len(), 3);
    assert!(!out.contains_key("status"));
}

#[test]
fn excludes_apply_at_every_level() {
    let store = seeded();
    let options = DumpOptions::new().depth(3).exclude("name");
    let out = dump(&store, &STATUS_MODEL, &row(&Status::new(1, "ok", Some(7))), &options).unwrap();

    assert!(!out.contains_key("name"));
    let Value::List(treatments) = &out["treatments"] else {
        panic!("treatments should dump as a list");
    };
    assert_eq!(treatments.len(), 2);
    assert!(
        treatments
            .iter()
            .all(|t| t.as_map().is_some_and(|m| !m.contains_key("name")))
    );
    assert!(out["category"].as_map().is_some());
}

#[test]
fn unset_single_relationship_dumps_as_null() {
    let store = seeded();
    let out = dump(
        &store,
        &STATUS_MODEL,
        &row(&Status::new(2, "ko", None)),
        &DumpOptions::default(),
    )
    .unwrap();

    assert_eq!(out["category"], Value::Null);
    assert_eq!(out["treatments"], Value::List(vec![]));
}

#[test]
fn load_without_key_builds_a_fresh_row() {
    let store = seeded();
    let loaded = load(&store, &STATUS_MODEL, &map(&[("name", text("plop"))]), false).unwrap();

    assert_eq!(loaded, map(&[("name", text("plop"))]));
}

#[test]
fn load_with_key_starts_from_stored_row() {
    let store = seeded();
    let loaded = load(&store, &STATUS_MODEL, &map(&[("id", Value::Int(1))]), false).unwrap();

    assert_eq!(loaded["name"], text("ok"));
    assert_eq!(loaded["category_id"], Value::Int(7));
}

#[test]
fn provided_scalars_override_stored_ones() {
    let store = seeded();
    let loaded = load(
        &store,
        &STATUS_MODEL,
        &map(&[("id", Value::Int(1)), ("name", text("renamed"))]),
        false,
    )
    .unwrap();

    assert_eq!(loaded["name"], text("renamed"));
}

#[test]
fn nested_mapping_sets_foreign_key() {
    let store = seeded();
    let mapping = map(&[
        ("name", text("new")),
        ("status", Value::Map(map(&[("id", Value::Int(2))]))),
    ]);
    let loaded = load(&store, &TREATMENT_MODEL, &mapping, false).unwrap();

    assert_eq!(loaded["status_id"], Value::Int(2));
}

#[test]
fn hard_load_requires_every_scalar() {
    let store = seeded();
    let err = load(&store, &STATUS_MODEL, &map(&[("name", text("x"))]), true).unwrap_err();

    assert!(matches!(
        err,
        QueryError::Load(LoadError::MissingKey {
            entity: "Status",
            field: "id"
        })
    ));
}

#[test]
fn hard_load_rejects_unknown_keys() {
    let store = seeded();
    let mapping = map(&[
        ("id", Value::Int(3)),
        ("name", text("x")),
        ("category_id", Value::Null),
        ("colour", text("red")),
    ]);
    let err = load(&store, &STATUS_MODEL, &mapping, true).unwrap_err();

    assert!(matches!(
        err,
        QueryError::Load(LoadError::UnknownField { .. })
    ));
}

#[test]
fn relationship_value_shape_is_checked() {
    let store = seeded();

    let err = load(
        &store,
        &TREATMENT_MODEL,
        &map(&[("status", Value::Int(1))]),
        false,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        QueryError::Load(LoadError::InvalidRelationValue { .. })
    ));

    let err = load(
        &store,
        &STATUS_MODEL,
        &map(&[("treatments", Value::List(vec![Value::Int(1)]))]),
        false,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        QueryError::Load(LoadError::InvalidRelationValue { .. })
    ));
}

#[test]
fn dump_then_load_round_trips() {
    let store = seeded();
    let original = row(&Treatment::new(2, "test 1", 1));
    let dumped = dump(&store, &TREATMENT_MODEL, &original, &DumpOptions::default()).unwrap();
    let loaded = load(&store, &TREATMENT_MODEL, &dumped, false).unwrap();

    assert_eq!(loaded, original);
    assert_eq!(store.len(&TREATMENT_MODEL), 2);
}
