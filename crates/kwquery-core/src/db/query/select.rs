use crate::{
    db::{
        backend::Backend,
        criteria::Criteria,
        logical::Q,
        query::{QueryError, SelectPlan},
        session::DbSession,
    },
    serialize::from_field_map,
    traits::EntityKind,
    value::FieldMap,
};
use std::marker::PhantomData;

///
/// Select
///
/// Session-bound, filtered and joined query over `E`.
/// Refining it compiles more clauses against the same join set; executing
/// it never consumes the plan, so one handle can be counted and fetched.
///

pub struct Select<'a, E, B>
where
    E: EntityKind,
    B: Backend,
{
    session: &'a DbSession<B>,
    plan: SelectPlan,
    _marker: PhantomData<fn() -> E>,
}

impl<'a, E, B> Select<'a, E, B>
where
    E: EntityKind,
    B: Backend,
{
    pub(crate) const fn new(session: &'a DbSession<B>, plan: SelectPlan) -> Self {
        Self {
            session,
            plan,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn plan(&self) -> &SelectPlan {
        &self.plan
    }

    // ------------------------------------------------------------------
    // Refinement
    // ------------------------------------------------------------------

    pub fn filter(mut self, q: &Q) -> Result<Self, QueryError> {
        self.plan.apply(q)?;

        Ok(self)
    }

    pub fn filter_by(mut self, criteria: &Criteria) -> Result<Self, QueryError> {
        self.plan.apply_criteria(criteria)?;

        Ok(self)
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Matching rows in their stored form.
    pub fn rows(&self) -> Result<Vec<FieldMap>, QueryError> {
        self.session.execute_rows(&self.plan)
    }

    pub fn all(&self) -> Result<Vec<E>, QueryError> {
        self.rows()?
            .iter()
            .map(|row| from_field_map(E::MODEL.entity_name, row).map_err(QueryError::from))
            .collect()
    }

    /// Exactly one matching entity; `NotFound` or `MultipleResults` otherwise.
    pub fn one(&self) -> Result<E, QueryError> {
        let row = self.session.execute_one(&self.plan)?;

        Ok(from_field_map(E::MODEL.entity_name, &row)?)
    }

    pub fn count(&self) -> Result<u64, QueryError> {
        self.session.execute_count(&self.plan)
    }
}
