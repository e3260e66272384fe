//! Query-building and execution surface.
//!
//! Criteria and `Q` trees compile into [`expr::Expr`] clauses plus a
//! [`join::JoinSet`]; [`query::SelectPlan`] carries both to a
//! [`backend::Backend`] for execution. [`session::DbSession`] is the
//! caller-facing façade over all of it.

pub mod backend;
pub mod criteria;
pub mod expr;
pub mod graph;
pub mod join;
pub mod logical;
pub mod query;
pub mod session;
pub mod store;

pub use backend::{Backend, StoreError};
pub use criteria::{Criteria, CriteriaError};
pub use expr::{AttributeRef, CompareOp, Expr};
pub use graph::{DumpOptions, LoadError};
pub use join::{Join, JoinSet};
pub use logical::{Q, QNode};
pub use query::{QueryError, Search, Select, SelectPlan};
pub use session::{DbSession, EntityQuery, SessionError, SessionProvider, SessionSlot};
pub use store::MemoryStore;
