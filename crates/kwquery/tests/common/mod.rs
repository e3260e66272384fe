#![allow(dead_code)]

use kwquery::prelude::*;

///
/// Treatment
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Treatment {
    pub id: u64,
    pub name: String,
    pub status_id: Option<u64>,
}

static TREATMENT_FIELDS: [FieldModel; 4] = [
    FieldModel::scalar("id", ScalarKind::Uint),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::scalar("status_id", ScalarKind::Uint),
    FieldModel::relation("status", RelationModel::one(status_model, "status_id", "id")),
];

pub static TREATMENT_MODEL: EntityModel = EntityModel::new(
    "common::Treatment",
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
pub struct Status {
    pub id: u64,
    pub name: String,
}

static STATUS_FIELDS: [FieldModel; 3] = [
    FieldModel::scalar("id", ScalarKind::Uint),
    FieldModel::scalar("name", ScalarKind::Text),
    FieldModel::relation(
        "treatments",
        RelationModel::many(treatment_model, "id", "status_id"),
    ),
];

pub static STATUS_MODEL: EntityModel =
    EntityModel::new("common::Status", "Status", "status", &["id"], &STATUS_FIELDS);

fn status_model() -> &'static EntityModel {
    &STATUS_MODEL
}

impl EntityKind for Status {
    const MODEL: &'static EntityModel = &STATUS_MODEL;
}

/// Two statuses and eighteen treatments: ten "ok" (ids 1-10) and eight "ko"
/// (ids 11-18).
pub fn populate(db: &DbSession<MemoryStore>) {
    let statuses = [
        Status {
            id: 1,
            name: "ok".into(),
        },
        Status {
            id: 2,
            name: "ko".into(),
        },
    ];
    db.insert_many(&statuses).unwrap();

    let ok = (0..10).map(|i| Treatment {
        id: i + 1,
        name: format!("test {i}"),
        status_id: Some(1),
    });
    let ko = (0..8).map(|i| Treatment {
        id: i + 11,
        name: format!("test_ko {i}"),
        status_id: Some(2),
    });
    let treatments: Vec<Treatment> = ok.chain(ko).collect();
    db.insert_many(&treatments).unwrap();
}

pub fn session() -> DbSession<MemoryStore> {
    let db = DbSession::new(MemoryStore::new());
    populate(&db);

    db
}
