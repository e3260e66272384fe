//! Module: criteria
//! Responsibility: keyword-path criteria, the operator table, and their
//! compilation into comparison expressions plus joins.
//! Does not own: boolean combination (see `logical`) or execution.

mod compile;
pub mod operator;


use crate::{
    db::expr::CompareOp,
    error::{ErrorClass, ErrorOrigin, InternalError},
    traits::FieldValue,
    value::Value,
};
use derive_more::IntoIterator;
use thiserror::Error as ThisError;

pub use compile::{CriteriaPath, PATH_DELIMITER, compile, parse_path};

///
/// Criteria
///
/// Flat keyword criteria: `(path, value)` pairs such as
/// `("status__name", "ok")`. Entries keep insertion order, which is the order
/// they compile in and therefore the order joins are first encountered.
/// Re-inserting a path replaces its value in place.
///

#[derive(Clone, Debug, Default, IntoIterator, PartialEq)]
pub struct Criteria {
    #[into_iterator(owned, ref)]
    entries: Vec<(String, Value)>,
}

impl Criteria {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`Criteria::insert`].
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, value: impl FieldValue) -> Self {
        self.insert(path, value);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, value: impl FieldValue) {
        let path = path.into();
        let value = value.to_value();

        match self.entries.iter_mut().find(|(existing, _)| *existing == path) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((path, value)),
        }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == path)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Value)> {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Criteria
where
    K: Into<String>,
    V: FieldValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = Self::new();
        for (path, value) in iter {
            criteria.insert(path, value);
        }

        criteria
    }
}

///
/// CriteriaError
///
/// Failures while resolving a criteria path against an entity model.
/// Every variant is fail-fast: nothing is partially matched or guessed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CriteriaError {
    #[error("criteria path is empty")]
    EmptyPath,

    #[error("criteria path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    #[error("criteria path '{path}' names no attribute")]
    MissingAttribute { path: String },

    #[error("entity '{entity}' has no relationship '{name}'")]
    UnknownRelation { entity: &'static str, name: String },

    #[error("entity '{entity}' has no scalar attribute '{name}'")]
    UnknownField { entity: &'static str, name: String },

    #[error(
        "'{entity}.{name}' is a relationship; compare one of its scalar attributes instead"
    )]
    RelationNotComparable { entity: &'static str, name: String },

    #[error("operator '{op}' on '{entity}.{field}' requires a list value, got {kind}")]
    InvalidListValue {
        entity: &'static str,
        field: &'static str,
        op: CompareOp,
        kind: &'static str,
    },

    #[error("operator '{op}' is not supported on '{entity}.{field}' ({detail})")]
    UnsupportedOperator {
        entity: &'static str,
        field: &'static str,
        op: CompareOp,
        detail: String,
    },

    #[error("criteria set is empty")]
    EmptyCriteria,
}

impl CriteriaError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedOperator { .. } => ErrorClass::Unsupported,
            _ => ErrorClass::InvalidInput,
        }
    }

    /// Whether this is an unknown-attribute failure (any hop or terminal).
    #[must_use]
    pub const fn is_unknown_attribute(&self) -> bool {
        matches!(
            self,
            Self::UnknownRelation { .. } | Self::UnknownField { .. }
        )
    }
}

impl From<CriteriaError> for InternalError {
    fn from(err: CriteriaError) -> Self {
        match err.class() {
            ErrorClass::InvalidInput => Self::criteria_invalid(err.to_string()),
            class => Self::new(class, ErrorOrigin::Criteria, err.to_string()),
        }
    }
}
