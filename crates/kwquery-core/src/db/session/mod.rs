//! Module: session
//! Responsibility: the caller-facing query façade (`DbSession`), the
//! per-entity extension trait and the session registration slot.
//! Does not own: plan compilation or row storage.

mod ext;
mod slot;


use crate::{
    db::{
        backend::Backend,
        graph::{self, DumpOptions},
        query::{QueryError, Search, Select, SelectPlan},
    },
    serialize::{from_field_map, to_field_map},
    traits::EntityKind,
    value::FieldMap,
};

pub use ext::EntityQuery;
pub use slot::{SessionError, SessionProvider, SessionSlot};

///
/// DbSession
///
/// Session-scoped handle over a backend, with a debug switch.
///

pub struct DbSession<B: Backend> {
    backend: B,
    debug: bool,
}

impl<B: Backend> DbSession<B> {
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            debug: false,
        }
    }

    /// Log every executed plan through `tracing` at debug level.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.debug
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            tracing::debug!(target: "kwquery", "{}", s.as_ref());
        }
    }

    // ---------------------------------------------------------------------
    // Query façade
    // ---------------------------------------------------------------------

    /// Compile `search` against `E` into a chainable handle.
    pub fn search<E: EntityKind>(
        &self,
        search: impl Into<Search>,
    ) -> Result<Select<'_, E, B>, QueryError> {
        let plan = SelectPlan::build(E::MODEL, &search.into())?;

        Ok(Select::new(self, plan))
    }

    pub fn all<E: EntityKind>(&self) -> Result<Vec<E>, QueryError> {
        self.search::<E>(Search::new())?.all()
    }

    pub fn filter<E: EntityKind>(&self, search: impl Into<Search>) -> Result<Vec<E>, QueryError> {
        self.search::<E>(search)?.all()
    }

    /// The single entity matching `search`.
    pub fn get<E: EntityKind>(&self, search: impl Into<Search>) -> Result<E, QueryError> {
        self.search::<E>(search)?.one()
    }

    pub fn count<E: EntityKind>(&self, search: impl Into<Search>) -> Result<u64, QueryError> {
        self.search::<E>(search)?.count()
    }

    // ---------------------------------------------------------------------
    // Writes
    // ---------------------------------------------------------------------

    pub fn insert<E: EntityKind>(&self, entity: &E) -> Result<(), QueryError> {
        let row = to_field_map(E::MODEL.entity_name, entity)?;
        self.backend.insert(E::MODEL, row)?;

        Ok(())
    }

    pub fn insert_many<'e, E, I>(&self, entities: I) -> Result<usize, QueryError>
    where
        E: EntityKind,
        I: IntoIterator<Item = &'e E>,
    {
        let mut inserted = 0;
        for entity in entities {
            self.insert(entity)?;
            inserted += 1;
        }
        self.debug_log(format!("inserted {inserted} {} rows", E::MODEL.entity_name));

        Ok(inserted)
    }

    // ---------------------------------------------------------------------
    // Object graph
    // ---------------------------------------------------------------------

    /// Nested mapping of `entity` and its relationships.
    pub fn dump<E: EntityKind>(
        &self,
        entity: &E,
        options: &DumpOptions,
    ) -> Result<FieldMap, QueryError> {
        let row = to_field_map(E::MODEL.entity_name, entity)?;

        Ok(graph::dump(&self.backend, E::MODEL, &row, options)?)
    }

    /// Hydrate an `E` from a nested mapping. With `hard`, every scalar
    /// attribute must be present and unknown keys are rejected.
    pub fn load<E: EntityKind>(&self, mapping: &FieldMap, hard: bool) -> Result<E, QueryError> {
        let row = graph::load(&self.backend, E::MODEL, mapping, hard)?;

        Ok(from_field_map(E::MODEL.entity_name, &row)?)
    }

    // ---------------------------------------------------------------------
    // Plan execution (crate-internal; used by `Select`)
    // ---------------------------------------------------------------------

    pub(crate) fn execute_rows(&self, plan: &SelectPlan) -> Result<Vec<FieldMap>, QueryError> {
        self.debug_log(format!("all: {plan}"));
        let rows = self.backend.execute(plan)?;
        self.debug_log(format!("all: {} rows", rows.len()));

        Ok(rows)
    }

    pub(crate) fn execute_one(&self, plan: &SelectPlan) -> Result<FieldMap, QueryError> {
        self.debug_log(format!("one: {plan}"));

        Ok(self.backend.fetch_one(plan)?)
    }

    pub(crate) fn execute_count(&self, plan: &SelectPlan) -> Result<u64, QueryError> {
        self.debug_log(format!("count: {plan}"));
        let count = self.backend.count(plan)?;
        self.debug_log(format!("count: {count}"));

        Ok(count)
    }
}
