//! ## Crate layout
//! - `core`: entity models, values, criteria compilation, `Q` combinators,
//!   the session façade, the in-memory backend and load/dump.
//! - `error`: the public error taxonomy.
//! - `json`: JSON helpers for load/dump mappings.
//!
//! The `prelude` brings in the vocabulary needed to declare entities and
//! query them: `criteria!`, `q!`, `DbSession` and the `EntityQuery` trait.

pub use kwquery_core as core;

pub mod error;
pub mod json;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use crate::core::{criteria, q};
pub use error::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        criteria,
        db::{
            Backend as _, DbSession, EntityQuery as _, MemoryStore, Q, Search, SessionSlot,
            criteria::Criteria, graph::DumpOptions,
        },
        model::{
            entity::EntityModel,
            field::{FieldModel, RelationModel, ScalarKind},
        },
        q,
        traits::EntityKind,
        value::{FieldMap, Value},
    };
    pub use serde::{Deserialize, Serialize};
}
