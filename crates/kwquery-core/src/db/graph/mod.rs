//! Module: graph
//! Responsibility: nested-mapping dump and load of entity rows, following
//! relationships through the backend.
//! Does not own: typed conversion (see `serialize`).

mod dump;
mod load;

#[cfg(test)]
mod tests;

use crate::error::{ErrorClass, ErrorOrigin, InternalError};
use thiserror::Error as ThisError;

pub use dump::dump;
pub use load::load;

///
/// DumpOptions
///
/// `depth` counts the current entity as one level: `1` dumps scalars only,
/// `2` adds each relationship's scalars, and so on. Excluded names are
/// skipped at every level.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DumpOptions {
    pub excludes: Vec<String>,
    pub depth: usize,
}

impl DumpOptions {
    pub const DEFAULT_DEPTH: usize = 2;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            excludes: Vec::new(),
            depth: Self::DEFAULT_DEPTH,
        }
    }

    #[must_use]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excludes.push(name.into());
        self
    }

    #[must_use]
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excludes.iter().any(|excluded| excluded == name)
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self::new()
    }
}

///
/// LoadError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum LoadError {
    #[error("mapping for '{entity}' is missing attribute '{field}'")]
    MissingKey {
        entity: &'static str,
        field: &'static str,
    },

    #[error("mapping for '{entity}' has unknown attribute '{name}'")]
    UnknownField { entity: &'static str, name: String },

    #[error("relationship '{entity}.{name}' expects {expected}, got {kind}")]
    InvalidRelationValue {
        entity: &'static str,
        name: &'static str,
        expected: &'static str,
        kind: &'static str,
    },
}

impl From<LoadError> for InternalError {
    fn from(err: LoadError) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Load, err.to_string())
    }
}
