//! Module: query
//! Responsibility: search inputs, select plans and the chainable `Select`
//! handle returned by the session façade.
//! Does not own: execution (see `backend`) or criteria compilation.

mod plan;
mod select;


use crate::{
    db::{
        backend::StoreError, criteria::Criteria, criteria::CriteriaError, graph::LoadError,
        logical::Q,
    },
    error::InternalError,
    serialize::SerializeError,
};
use thiserror::Error as ThisError;

pub use plan::SelectPlan;
pub use select::Select;

///
/// QueryError
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("{0}")]
    Criteria(#[from] CriteriaError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Serialize(#[from] SerializeError),
}

impl QueryError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound { .. }))
    }

    #[must_use]
    pub const fn is_multiple_results(&self) -> bool {
        matches!(self, Self::Store(StoreError::MultipleResults { .. }))
    }
}

impl From<QueryError> for InternalError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Criteria(err) => err.into(),
            QueryError::Store(err) => err.into(),
            QueryError::Load(err) => err.into(),
            QueryError::Serialize(err) => err.into(),
        }
    }
}

///
/// Search
///
/// Inputs to one query build: `Q` operators applied in order, then flat
/// criteria. Each becomes part of a single conjunctive filter.
///

#[derive(Clone, Debug, Default)]
pub struct Search {
    pub operators: Vec<Q>,
    pub criteria: Criteria,
}

impl Search {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            operators: Vec::new(),
            criteria: Criteria::new(),
        }
    }

    #[must_use]
    pub fn operator(mut self, q: Q) -> Self {
        self.operators.push(q);
        self
    }

    #[must_use]
    pub fn criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }
}

impl From<Criteria> for Search {
    fn from(criteria: Criteria) -> Self {
        Self::new().criteria(criteria)
    }
}

impl From<Q> for Search {
    fn from(q: Q) -> Self {
        Self::new().operator(q)
    }
}

impl From<&Q> for Search {
    fn from(q: &Q) -> Self {
        Self::new().operator(q.clone())
    }
}

impl From<Vec<Q>> for Search {
    fn from(operators: Vec<Q>) -> Self {
        Self {
            operators,
            criteria: Criteria::new(),
        }
    }
}

impl From<(Vec<Q>, Criteria)> for Search {
    fn from((operators, criteria): (Vec<Q>, Criteria)) -> Self {
        Self {
            operators,
            criteria,
        }
    }
}

impl From<(Q, Criteria)> for Search {
    fn from((q, criteria): (Q, Criteria)) -> Self {
        Self::new().operator(q).criteria(criteria)
    }
}
