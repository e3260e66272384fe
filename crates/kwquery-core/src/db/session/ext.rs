use crate::{
    db::{
        backend::Backend,
        graph::DumpOptions,
        query::{QueryError, Search, Select},
        session::DbSession,
    },
    traits::EntityKind,
    value::FieldMap,
};

///
/// EntityQuery
///
/// Query methods available on every entity type, taking the session
/// explicitly: `Treatment::count(&db, criteria!(status__name = "ok"))`.
///

pub trait EntityQuery: EntityKind + Sized {
    fn search<B: Backend>(
        db: &DbSession<B>,
        search: impl Into<Search>,
    ) -> Result<Select<'_, Self, B>, QueryError> {
        db.search::<Self>(search)
    }

    fn all<B: Backend>(db: &DbSession<B>) -> Result<Vec<Self>, QueryError> {
        db.all::<Self>()
    }

    fn filter<B: Backend>(
        db: &DbSession<B>,
        search: impl Into<Search>,
    ) -> Result<Vec<Self>, QueryError> {
        db.filter::<Self>(search)
    }

    fn get<B: Backend>(db: &DbSession<B>, search: impl Into<Search>) -> Result<Self, QueryError> {
        db.get::<Self>(search)
    }

    fn count<B: Backend>(db: &DbSession<B>, search: impl Into<Search>) -> Result<u64, QueryError> {
        db.count::<Self>(search)
    }

    fn load<B: Backend>(
        db: &DbSession<B>,
        mapping: &FieldMap,
        hard: bool,
    ) -> Result<Self, QueryError> {
        db.load::<Self>(mapping, hard)
    }

    fn dump<B: Backend>(
        &self,
        db: &DbSession<B>,
        options: &DumpOptions,
    ) -> Result<FieldMap, QueryError> {
        db.dump(self, options)
    }
}

impl<E: EntityKind> EntityQuery for E {}
