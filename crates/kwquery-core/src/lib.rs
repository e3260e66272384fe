//! Core runtime for kwquery: entity models, values, keyword-criteria
//! compilation, `Q` combinators, the query façade, an in-memory backend and
//! object-graph load/dump.
#![warn(unreachable_pub)]

mod macros;

// public exports are one module level down
pub mod db;
pub mod error;
pub mod model;
pub mod serialize;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Domain vocabulary plus the session façade and its extension trait.
///

pub mod prelude {
    pub use crate::{
        criteria,
        db::{
            Backend, DbSession, EntityQuery, MemoryStore, Q, SessionSlot,
            criteria::Criteria, graph::DumpOptions,
        },
        model::{
            entity::EntityModel,
            field::{FieldModel, RelationModel, ScalarKind},
        },
        q,
        traits::{EntityKind, FieldValue},
        value::{FieldMap, Value},
    };
}
