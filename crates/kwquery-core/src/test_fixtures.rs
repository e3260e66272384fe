//! Entity fixtures shared by unit tests.
//!
//! `Treatment → status → Status → category → Category` is a chain of
//! many-to-one hops with one-to-many back references, and `Node` is
//! self-referential (`parent` / `children`).

use crate::{
    model::{
        entity::EntityModel,
        field::{FieldModel, RelationModel, ScalarKind},
    },
    traits::EntityKind,
};
use serde::{Deserialize, Serialize};

///
/// Treatment
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub(crate) struct Treatment {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) status_id: Option<u64>,
}

impl Treatment {
    pub(crate) fn new(id: u64, name: &str, status_id: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            status_id: Some(status_id),
        }
    }
}

static TREATMENT_FIELDS: [FieldModel; 4] = [
    FieldModel::scalar("id", ScalarKind::Uint),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::scalar("status_id", ScalarKind::Uint),
    FieldModel::relation("status", RelationModel::one(status_model, "status_id", "id")),
];

pub(crate) static TREATMENT_MODEL: EntityModel = EntityModel::new(
    "test_fixtures::Treatment",
    "Treatment",
    "treatment",
    &["id"],
    &TREATMENT_FIELDS,
);

fn treatment_model() -> &'static EntityModel {
    &TREATMENT_MODEL
}

impl EntityKind for Treatment {
    const MODEL: &'static EntityModel = &TREATMENT_MODEL;
}

///
/// Status
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub(crate) struct Status {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) category_id: Option<u64>,
}

impl Status {
    pub(crate) fn new(id: u64, name: &str, category_id: Option<u64>) -> Self {
        Self {
            id,
            name: name.to_string(),
            category_id,
        }
    }
}

static STATUS_FIELDS: [FieldModel; 5] = [
    FieldModel::scalar("id", ScalarKind::Uint),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::scalar("category_id", ScalarKind::Uint),
    FieldModel::relation(
        "category",
        RelationModel::one(category_model, "category_id", "id"),
    ),
    FieldModel::relation(
        "treatments",
        RelationModel::many(treatment_model, "id", "status_id"),
    ),
];

pub(crate) static STATUS_MODEL: EntityModel = EntityModel::new(
    "test_fixtures::Status",
    "Status",
    "status",
    &["id"],
    &STATUS_FIELDS,
);

fn status_model() -> &'static EntityModel {
    &STATUS_MODEL
}

impl EntityKind for Status {
    const MODEL: &'static EntityModel = &STATUS_MODEL;
}

///
/// Category
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub(crate) struct Category {
    pub(crate) id: u64,
    pub(crate) label: String,
}

static CATEGORY_FIELDS: [FieldModel; 3] = [
    FieldModel::scalar("id", ScalarKind::Uint),
    FieldModel::scalar("label", ScalarKind::Text),
    FieldModel::relation("statuses", RelationModel::many(status_model, "id", "category_id")),
];

pub(crate) static CATEGORY_MODEL: EntityModel = EntityModel::new(
    "test_fixtures::Category",
    "Category",
    "category",
    &["id"],
    &CATEGORY_FIELDS,
);

fn category_model() -> &'static EntityModel {
    &CATEGORY_MODEL
}

impl EntityKind for Category {
    const MODEL: &'static EntityModel = &CATEGORY_MODEL;
}

///
/// Node
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub(crate) struct Node {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) parent_id: Option<u64>,
}

static NODE_FIELDS: [FieldModel; 5] = [
    FieldModel::scalar("id", ScalarKind::Uint),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::scalar("parent_id", ScalarKind::Uint),
    FieldModel::relation("parent", RelationModel::one(node_model, "parent_id", "id")),
    FieldModel::relation("children", RelationModel::many(node_model, "id", "parent_id")),
];

pub(crate) static NODE_MODEL: EntityModel = EntityModel::new(
    "test_fixtures::Node",
    "Node",
    "node",
    &["id"],
    &NODE_FIELDS,
);

fn node_model() -> &'static EntityModel {
    &NODE_MODEL
}

impl EntityKind for Node {
    const MODEL: &'static EntityModel = &NODE_MODEL;
}
