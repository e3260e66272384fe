use crate::{
    model::field::{Cardinality, ScalarKind},
    test_fixtures::{CATEGORY_MODEL, NODE_MODEL, STATUS_MODEL, TREATMENT_MODEL},
};

#[test]
fn scalar_lookup_returns_kind() {
    let (field, kind) = TREATMENT_MODEL.scalar("name").unwrap();

    assert_eq!(field.name, "name");
    assert_eq!(kind, ScalarKind::Text);
    assert!(TREATMENT_MODEL.scalar("status").is_none());
    assert!(TREATMENT_MODEL.scalar("missing").is_none());
}

#[test]
fn relation_lookup_resolves_target() {
    let (field, relation) = TREATMENT_MODEL.relation("status").unwrap();

    assert_eq!(field.name, "status");
    assert_eq!(relation.cardinality, Cardinality::One);
    assert!(relation.target().is(&STATUS_MODEL));
    assert_eq!((relation.local_key, relation.remote_key), ("status_id", "id"));
    assert!(TREATMENT_MODEL.relation("name").is_none());
}

#[test]
fn one_to_many_relations_are_flagged() {
    let (_, relation) = CATEGORY_MODEL.relation("statuses").unwrap();

    assert!(relation.is_many());
    assert!(relation.target().is(&STATUS_MODEL));
}

#[test]
fn self_reference_points_back_at_itself() {
    let (_, parent) = NODE_MODEL.relation("parent").unwrap();
    let (_, children) = NODE_MODEL.relation("children").unwrap();

    assert!(parent.target().is(&NODE_MODEL));
    assert!(children.target().is(&NODE_MODEL));
}

#[test]
fn scalars_and_relations_partition_fields() {
    let scalars: Vec<_> = STATUS_MODEL.scalars().map(|field| field.name).collect();
    let relations: Vec<_> = STATUS_MODEL
        .relations()
        .map(|(field, _)| field.name)
        .collect();

    assert_eq!(scalars, vec!["id", "name", "category_id"]);
    assert_eq!(relations, vec!["category", "treatments"]);
    assert_eq!(scalars.len() + relations.len(), STATUS_MODEL.fields.len());
}
