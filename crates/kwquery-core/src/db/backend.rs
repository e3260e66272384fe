use crate::{
    db::{
        expr::{AttributeRef, CompareOp, Expr},
        query::SelectPlan,
    },
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::entity::EntityModel,
    value::{FieldMap, Value},
};
use std::sync::Arc;
use thiserror::Error as ThisError;

///
/// StoreError
/// Errors raised by a backend while writing or executing a plan.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("expected exactly one row, found 0 (entity {entity})")]
    NotFound { entity: &'static str },

    #[error("expected exactly one row, found {count} (entity {entity})")]
    MultipleResults { entity: &'static str, count: u64 },

    #[error("duplicate primary key {key} (entity {entity})")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("row is missing primary-key attribute '{field}' (entity {entity})")]
    MissingPrimaryKey {
        entity: &'static str,
        field: &'static str,
    },
}

impl StoreError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::MultipleResults { .. } => ErrorClass::NotUnique,
            Self::DuplicateKey { .. } => ErrorClass::Conflict,
            Self::MissingPrimaryKey { .. } => ErrorClass::InvalidInput,
        }
    }
}

impl From<StoreError> for InternalError {
    fn from(err: StoreError) -> Self {
        match err.class() {
            ErrorClass::NotFound => Self::store_not_found(err.to_string()),
            class => Self::new(class, ErrorOrigin::Store, err.to_string()),
        }
    }
}

///
/// Backend
///
/// Execution engine boundary. A backend stores rows per entity model and
/// runs [`SelectPlan`]s: inner-joins every plan join in order, keeps the
/// root rows for which the conjunctive filter holds, and returns each
/// matching root row once.
///

pub trait Backend {
    /// Store one row of `model`.
    fn insert(&self, model: &'static EntityModel, row: FieldMap) -> Result<(), StoreError>;

    /// Run a plan and return the matching root rows.
    fn execute(&self, plan: &SelectPlan) -> Result<Vec<FieldMap>, StoreError>;

    fn count(&self, plan: &SelectPlan) -> Result<u64, StoreError> {
        Ok(self.execute(plan)?.len() as u64)
    }

    /// Exactly one matching row.
    fn fetch_one(&self, plan: &SelectPlan) -> Result<FieldMap, StoreError> {
        let mut rows = self.execute(plan)?;
        let entity = plan.root.entity_name;

        match rows.len() {
            0 => Err(StoreError::NotFound { entity }),
            1 => Ok(rows.remove(0)),
            n => Err(StoreError::MultipleResults {
                entity,
                count: n as u64,
            }),
        }
    }

    /// Rows of `model` whose `field` equals `value`.
    fn lookup(
        &self,
        model: &'static EntityModel,
        field: &'static str,
        value: &Value,
    ) -> Result<Vec<FieldMap>, StoreError> {
        let mut plan = SelectPlan::new(model);
        plan.push(Expr::compare(
            AttributeRef::new(model, field),
            CompareOp::Eq,
            value.clone(),
        ));

        self.execute(&plan)
    }
}

impl<B: Backend + ?Sized> Backend for &B {
    fn insert(&self, model: &'static EntityModel, row: FieldMap) -> Result<(), StoreError> {
        (**self).insert(model, row)
    }

    fn execute(&self, plan: &SelectPlan) -> Result<Vec<FieldMap>, StoreError> {
        (**self).execute(plan)
    }
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn insert(&self, model: &'static EntityModel, row: FieldMap) -> Result<(), StoreError> {
        (**self).insert(model, row)
    }

    fn execute(&self, plan: &SelectPlan) -> Result<Vec<FieldMap>, StoreError> {
        (**self).execute(plan)
    }
}
