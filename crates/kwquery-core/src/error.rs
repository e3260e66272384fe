use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable classification.
/// Every concern-level error (`CriteriaError`, `QueryError`, `StoreError`,
/// `SessionError`, `LoadError`, `SerializeError`) converts into it.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a criteria-origin invalid-input error.
    pub(crate) fn criteria_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Criteria, message)
    }

    /// Construct a store-origin not-found error.
    pub(crate) fn store_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::NotFound, ErrorOrigin::Store, message)
    }
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// Caller input names something that does not exist or cannot apply.
    InvalidInput,
    NotFound,
    /// More rows matched than the operation allows.
    NotUnique,
    /// A duplicate registration or primary key.
    Conflict,
    Unsupported,
    /// Required configuration is absent.
    Unconfigured,
    Internal,
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Criteria,
    Store,
    Session,
    Load,
    Serialize,
}
